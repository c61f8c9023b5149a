/// Navigation sink for redirects issued outside the component tree.
pub trait Redirect {
    /// Path of the page currently shown.
    fn current_path(&self) -> String;

    fn redirect(&self, path: &str);
}

/// Full page navigation through `window.location`.
///
/// Used by the HTTP client's forced logout, which must also drop any in-memory UI state.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRedirect;

#[cfg(target_arch = "wasm32")]
impl Redirect for BrowserRedirect {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }

    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };

        if let Err(e) = window.location().set_href(path) {
            dioxus_logger::tracing::error!("Failed to navigate to {}: {:?}", path, e);
        }
    }
}
