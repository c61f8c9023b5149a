use dioxus::prelude::*;

/// Labelled input with its validation message underneath.
#[component]
pub fn TextField(
    label: &'static str,
    #[props(default = "text")] input_type: &'static str,
    value: String,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let class = if error.is_some() {
        "input input-error"
    } else {
        "input"
    };

    rsx!(
        div { class: "field",
            label { class: "label", "{label}" }
            input {
                class,
                r#type: input_type,
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    )
}
