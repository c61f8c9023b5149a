//! Facades over the backend REST API.
//!
//! Each service borrows an [`ApiClient`](crate::http::ApiClient) and exposes one method per
//! backend operation, returning the crate [`Error`](crate::error::Error).

pub mod admin;
pub mod auth;
pub mod donation;
pub mod ngo;
pub mod payment;
pub mod volunteer;

pub use admin::AdminService;
pub use auth::{AuthService, Credentials, RegistrationForm};
pub use donation::DonationService;
pub use ngo::NgoService;
pub use payment::MockPaymentProcessor;
pub use volunteer::VolunteerService;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
