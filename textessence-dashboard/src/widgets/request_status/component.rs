use dioxus::prelude::*;

#[component]
pub fn RequestStatus(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div { class: "request-status error",
                span { "Could not load corpora: {message}" }
            }
        }
    }
}
