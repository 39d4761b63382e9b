use dioxus::prelude::*;

/// Placeholder for a list with nothing in it
#[component]
pub fn EmptyState(#[props(into)] title: String, #[props(into)] subtitle: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center gap-1 py-6 text-center",
            div { class: "text-white font-semibold", "{title}" }
            div { class: "text-gray-400 text-sm", "{subtitle}" }
        }
    }
}
