use dioxus::prelude::*;

/// Centered overlay; clicking the backdrop or the close button calls `onclose`
#[component]
pub fn Modal(
    #[props(into)] title: String,
    onclose: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay fixed inset-0 bg-black bg-opacity-80 flex items-center justify-center z-1000",
            onclick: move |_| onclose.call(()),
            div {
                class: "modal-content bg-dark-surface rounded-xl p-6 w-11/12 max-w-2xl max-h-[90vh] overflow-y-auto",
                onclick: move |e| e.stop_propagation(),
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 { class: "text-white m-0", "{title}" }
                    button {
                        class: "text-gray-400 hover:text-white text-xl bg-transparent border-0 cursor-pointer",
                        onclick: move |_| onclose.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}
