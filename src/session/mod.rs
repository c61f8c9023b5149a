//! Client-held session state.
//!
//! The session (bearer token, optional refresh token and the serialized user record) lives in a
//! key-value store: browser `localStorage` in the web build, an in-memory map natively. All reads
//! and writes go through [`SessionStore`], which also notifies subscribers (route guards, the
//! navigation bar) whenever the session changes, including changes made by another browser tab.

pub mod storage;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{SessionChange, SessionStore, Subscription};

pub const TOKEN_KEY: &str = "token";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_KEY: &str = "user";
/// Opportunistic cache of the logged in NGO's profile, safe to drop at any time.
pub const NGO_PROFILE_KEY: &str = "ngoProfile";
/// Opportunistic cache of donations made from this browser, safe to drop at any time.
pub const USER_DONATIONS_KEY: &str = "userDonations";

/// Storage backend used by the running client.
#[cfg(target_arch = "wasm32")]
pub type ClientStore = LocalStore;

/// Storage backend used by the running client.
#[cfg(not(target_arch = "wasm32"))]
pub type ClientStore = MemoryStore;
