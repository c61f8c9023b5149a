//! Dioxus front end: application root, router, shared components and pages.

pub mod app;
pub mod components;
pub mod format;
pub mod hooks;
pub mod redirect;
pub mod router;
pub mod routes;

pub use app::App;

use crate::{
    http::{ApiClient, ClientTransport},
    session::{ClientStore, SessionStore},
};

/// Redirect sink the API client uses for forced logout.
#[cfg(target_arch = "wasm32")]
pub type ClientRedirect = crate::nav::BrowserRedirect;

/// Redirect sink the API client uses for forced logout.
#[cfg(not(target_arch = "wasm32"))]
pub type ClientRedirect = redirect::RouterRedirect;

/// Session store provided to every component.
pub type Sessions = SessionStore<ClientStore>;

/// API client provided to every component.
pub type Client = ApiClient<ClientTransport, ClientStore, ClientRedirect>;
