//! Tests for the backend service facades against a mock backend.

mod donation;
mod ngo;
mod volunteer;
