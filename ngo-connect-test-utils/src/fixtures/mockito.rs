//! Mock backend endpoints.
//!
//! Endpoints accept any query string so the cache-busting parameter the client adds to
//! authenticated reads never prevents a match.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{fixtures::factory, setup::TestSetup};

impl TestSetup {
    /// Create a mock `POST /auth/login` endpoint returning a session for `role`.
    ///
    /// The mock only matches requests without an `Authorization` header, since login is a
    /// public endpoint and must never carry a stale bearer token.
    ///
    /// # Arguments
    /// - `role` - Role name placed in the response
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_login_endpoint(&mut self, role: &str, expected_requests: usize) -> Mock {
        self.server
            .mock("POST", "/auth/login")
            .match_query(Matcher::Any)
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::login_response(role).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /auth/refresh-token` endpoint issuing a new token for `role`.
    pub fn create_refresh_endpoint(&mut self, role: &str, expected_requests: usize) -> Mock {
        self.server
            .mock("POST", "/auth/refresh-token")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::refresh_response(role).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /auth/refresh-token` endpoint that rejects the refresh token.
    pub fn create_failed_refresh_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.server
            .mock("POST", "/auth/refresh-token")
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(factory::error_body("Refresh token expired").to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering `method path` with a JSON body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Request path to match, without query string
    /// - `status` - Status code to respond with
    /// - `body` - JSON response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint that only answers requests bearing `token`.
    pub fn create_authorized_endpoint(
        &mut self,
        method: &str,
        path: &str,
        token: &str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock(method, path)
            .match_query(Matcher::Any)
            .match_header("authorization", format!("Bearer {token}").as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
