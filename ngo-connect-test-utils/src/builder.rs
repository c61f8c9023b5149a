//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for declaring the backend endpoints a test expects.
//! All endpoints are queued and created against a fresh mock server during the final `build()`
//! call.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, setup::TestSetup};

type MockBuilder = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;

struct JsonEndpoint {
    method: String,
    path: String,
    token: Option<String>,
    status: usize,
    body: Value,
    expected_requests: usize,
}

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a [`TestSetup`]
/// whose mock server serves every declared endpoint.
#[derive(Default)]
pub struct TestBuilder {
    mock_builders: Vec<MockBuilder>,
    login_endpoints: Vec<(String, usize)>,
    refresh_endpoints: Vec<(String, usize)>,
    failed_refresh_endpoints: Vec<(usize, usize)>,
    json_endpoints: Vec<JsonEndpoint>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom mock endpoint.
    ///
    /// Custom endpoints are created before any shortcut endpoint.
    ///
    /// # Arguments
    /// - `builder` - Closure creating the mock on the test server
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Add a `POST /auth/login` endpoint returning a session for `role`.
    pub fn with_login_endpoint(mut self, role: &str, expected_requests: usize) -> Self {
        self.login_endpoints
            .push((role.to_string(), expected_requests));
        self
    }

    /// Add a `POST /auth/refresh-token` endpoint issuing a new token for `role`.
    pub fn with_refresh_endpoint(mut self, role: &str, expected_requests: usize) -> Self {
        self.refresh_endpoints
            .push((role.to_string(), expected_requests));
        self
    }

    /// Add a `POST /auth/refresh-token` endpoint responding with `status`.
    pub fn with_failed_refresh_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.failed_refresh_endpoints
            .push((status, expected_requests));
        self
    }

    /// Add an endpoint answering `method path` with `status` and a JSON body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Request path to match, without query string
    /// - `status` - Status code to respond with
    /// - `body` - JSON response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_json_endpoint(
        mut self,
        method: &str,
        path: &str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.json_endpoints.push(JsonEndpoint {
            method: method.to_string(),
            path: path.to_string(),
            token: None,
            status,
            body,
            expected_requests,
        });
        self
    }

    /// Same as [`Self::with_json_endpoint`] but only matching requests bearing `token`.
    pub fn with_authorized_endpoint(
        mut self,
        method: &str,
        path: &str,
        token: &str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.json_endpoints.push(JsonEndpoint {
            method: method.to_string(),
            path: path.to_string(),
            token: Some(token.to_string()),
            status,
            body,
            expected_requests,
        });
        self
    }

    /// Start the mock server and create every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Running mock server with all mocks registered
    /// - `Err(TestError)` - The mock server could not be set up
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (role, expected) in self.login_endpoints {
            mocks.push(setup.create_login_endpoint(&role, expected));
        }

        for (role, expected) in self.refresh_endpoints {
            mocks.push(setup.create_refresh_endpoint(&role, expected));
        }

        for (status, expected) in self.failed_refresh_endpoints {
            mocks.push(setup.create_failed_refresh_endpoint(status, expected));
        }

        for endpoint in self.json_endpoints {
            let mock = match endpoint.token {
                Some(token) => setup.create_authorized_endpoint(
                    &endpoint.method,
                    &endpoint.path,
                    &token,
                    endpoint.status,
                    endpoint.body,
                    endpoint.expected_requests,
                ),
                None => setup.create_json_endpoint(
                    &endpoint.method,
                    &endpoint.path,
                    endpoint.status,
                    endpoint.body,
                    endpoint.expected_requests,
                ),
            };
            mocks.push(mock);
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}
