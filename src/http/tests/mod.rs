//! Tests for the API client against a mock backend.

mod refresh;
