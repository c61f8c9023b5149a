//! Shared test setup for the NGO Connect client.
//!
//! Tests declare the backend endpoints they expect with [`TestBuilder`], receive a [`TestSetup`]
//! holding a running mockito server, point the client at [`TestSetup::url`], and finally call
//! [`TestSetup::assert_mocks`] to verify each endpoint was hit the expected number of times.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::*, fixtures::factory, TestBuilder, TestError, TestSetup,
    };
}
