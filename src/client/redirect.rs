use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::nav::Redirect;

/// Client-side navigation through the router, without reloading the page.
///
/// Only usable once the router is mounted.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouterRedirect;

impl Redirect for RouterRedirect {
    fn current_path(&self) -> String {
        router().full_route_string()
    }

    fn redirect(&self, path: &str) {
        if let Some(failure) = navigator().replace(path.to_string()) {
            tracing::warn!("Failed to navigate to {}: {:?}", path, failure);
        }
    }
}
