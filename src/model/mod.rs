pub mod admin;
pub mod api;
pub mod auth;
pub mod donation;
pub mod fund_report;
pub mod ngo;
pub mod opportunity;
pub mod payment;
pub mod user;
