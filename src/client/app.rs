use dioxus::prelude::*;

use crate::{
    client::{router::Route, Client, ClientRedirect, Sessions},
    config::ClientConfig,
    http::{ApiClient, ClientTransport},
    session::{ClientStore, SessionStore},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_context::<ClientConfig>();
    let transport = use_context::<ClientTransport>();

    let sessions = use_context_provider(|| -> Sessions { SessionStore::new(ClientStore::default()) });
    use_context_provider(|| -> Client {
        ApiClient::new(
            &config,
            transport.clone(),
            sessions.clone(),
            ClientRedirect::default(),
        )
    });

    #[cfg(target_arch = "wasm32")]
    use_hook(|| storage_sync::install(sessions.clone()));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "NGO Connect" }
        Router::<Route> {}
    }
}

/// Forwards `storage` events raised by other tabs to the session subscribers.
#[cfg(target_arch = "wasm32")]
mod storage_sync {
    use std::rc::Rc;

    use dioxus_logger::tracing;
    use wasm_bindgen::{closure::Closure, JsCast};

    use crate::{
        client::Sessions,
        session::{REFRESH_TOKEN_KEY, TOKEN_KEY, USER_KEY},
    };

    /// Keeps the listener registered until dropped.
    pub struct StorageListener {
        callback: Closure<dyn FnMut(web_sys::StorageEvent)>,
    }

    impl Drop for StorageListener {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "storage",
                    self.callback.as_ref().unchecked_ref(),
                );
            }
        }
    }

    pub fn install(sessions: Sessions) -> Option<Rc<StorageListener>> {
        let window = web_sys::window()?;

        let callback = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
            move |event: web_sys::StorageEvent| {
                // `None` means the whole storage was cleared
                let relevant = match event.key() {
                    Some(key) => [TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY].contains(&key.as_str()),
                    None => true,
                };
                if relevant {
                    sessions.notify_external();
                }
            },
        );

        if let Err(e) =
            window.add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to listen for session changes in other tabs: {:?}", e);
            return None;
        }

        Some(Rc::new(StorageListener { callback }))
    }
}
