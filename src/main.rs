#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing::{self, Level};

use ngo_connect::{client, config::ClientConfig, http::ClientTransport};

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    #[cfg(feature = "desktop")]
    dotenvy::dotenv().ok();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            return;
        }
    };

    let transport = match ClientTransport::new(&config) {
        Ok(transport) => transport,
        Err(e) => {
            tracing::error!("Failed to build HTTP transport: {}", e);
            return;
        }
    };

    tracing::info!("Using backend API at {}", config.api_base_url);

    LaunchBuilder::new()
        .with_context(config)
        .with_context(transport)
        .launch(client::App);
}
