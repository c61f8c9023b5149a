use dioxus::prelude::*;

/// Inline error banner; renders nothing without a message.
#[component]
pub fn ErrorAlert(message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            div { class: "alert alert-error", role: "alert",
                "{message}"
            }
        }
    )
}
