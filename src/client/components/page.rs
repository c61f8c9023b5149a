use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "page {class}",
            {children}
        }
    )
}

#[component]
pub fn Loading(label: Option<&'static str>) -> Element {
    let label = label.unwrap_or("Loading...");

    rsx!(
        div { class: "loading",
            span { class: "spinner" }
            p { "{label}" }
        }
    )
}
