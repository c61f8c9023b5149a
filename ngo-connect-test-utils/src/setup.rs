use mockito::{Mock, Server, ServerGuard};

use crate::error::TestError;

pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(TestSetup {
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock backend, used as the client's API base URL.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks created by the TestBuilder to verify
    /// they were invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
