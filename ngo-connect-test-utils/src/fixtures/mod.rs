//! Fixtures for backend payloads and mock HTTP endpoints.
//!
//! - `factory` - JSON bodies in the shapes the backend returns
//! - `mockito` - Endpoint helpers on [`crate::TestSetup`] serving those bodies

pub mod factory;
pub mod mockito;
