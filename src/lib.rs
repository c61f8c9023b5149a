#![allow(non_snake_case)]

pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod model;
pub mod nav;
pub mod service;
pub mod session;
pub mod util;
