//! HTTP client wrapper for the backend REST API.
//!
//! [`ApiClient`] prepares every request (JSON headers, bearer token, cache busting) and handles
//! a `401 Unauthorized` by exchanging the stored refresh token once and replaying the request.
//! When that recovery is impossible the session is cleared and the user is sent to login
//! selection. The wire itself is behind the [`Transport`] trait: `reqwasm` in the browser and
//! `reqwest` natively.

pub mod client;
#[cfg(not(target_arch = "wasm32"))]
pub mod reqwest;
#[cfg(target_arch = "wasm32")]
pub mod reqwasm;
pub mod transport;

pub use client::{is_public_endpoint, ApiClient, RequestContext, PUBLIC_ENDPOINTS, REFRESH_PATH};
#[cfg(target_arch = "wasm32")]
pub use reqwasm::ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use reqwest::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

/// Transport used by the running client.
#[cfg(target_arch = "wasm32")]
pub type ClientTransport = ReqwasmTransport;

/// Transport used by the running client.
#[cfg(not(target_arch = "wasm32"))]
pub type ClientTransport = ReqwestTransport;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
