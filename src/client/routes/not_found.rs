use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        document::Title { "Page not found | NGO Connect" }
        Page { class: "centered",
            h1 { class: "text-2xl", "404" }
            p { "No page exists at {path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to Home" }
        }
    )
}
