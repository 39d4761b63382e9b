use dioxus::prelude::*;

/// Single-line input bound to a string field
#[component]
pub fn TextInput(
    #[props(into)] value: String,
    #[props(into)] placeholder: String,
    #[props(into, default = "text".to_string())] input_type: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            r#type: "{input_type}",
            value: "{value}",
            placeholder: "{placeholder}",
            oninput: move |e| oninput.call(e.value()),
            class: "flex-1 min-w-0 p-2 bg-dark-bg border border-gray-700 rounded text-white",
        }
    }
}
