use dioxus::prelude::*;

use super::TextInput;
use crate::presentation::state::use_toast;
use crate::presentation::view_models::{AttackField, AttackTarget, EncounterSetup};

/// Collapsible attack list attached to one of the monster forms
#[component]
pub fn AttackEditorPanel(setup: Signal<EncounterSetup>, target: AttackTarget) -> Element {
    let toast = use_toast();

    let editor = setup.read().editor(target).clone();
    let label = editor.button_label();
    let hint = editor.pending_hint();
    let rows = editor.rows();

    rsx! {
        div {
            class: "flex flex-col gap-2",
            button {
                class: "self-start px-3 py-1 rounded bg-gray-800 text-white text-sm",
                onclick: move |_| setup.write().editor_mut(target).toggle(),
                "{label}"
            }
            if let Some(hint) = hint {
                div { class: "text-amber-300 text-xs", "{hint}" }
            }
            if editor.open {
                div {
                    class: "flex flex-col gap-2 p-3 bg-dark-bg rounded border border-gray-700",
                    div {
                        class: "grid grid-cols-2 gap-2",
                        for field in AttackField::ALL {
                            TextInput {
                                key: "{field.placeholder()}",
                                value: field.get(&editor.input).to_string(),
                                placeholder: field.placeholder(),
                                input_type: if field.is_numeric() { "number" } else { "text" },
                                oninput: move |value: String| {
                                    field.set(&mut setup.write().editor_mut(target).input, value);
                                },
                            }
                        }
                    }
                    button {
                        class: "px-3 py-2 bg-purple-600 text-white rounded text-sm hover:bg-purple-500",
                        onclick: move |_| {
                            let added = setup.write().editor_mut(target).add();
                            if let Err(message) = added {
                                toast.error(message);
                            }
                        },
                        "Добавить атаку"
                    }
                    if rows.is_empty() {
                        div { class: "text-gray-500 text-sm", "Атак пока нет" }
                    }
                    for (index, (name, summary)) in rows.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "flex items-start justify-between gap-2 text-sm",
                            div {
                                div { class: "text-white", "{name}" }
                                div { class: "text-gray-400", "{summary}" }
                            }
                            button {
                                class: "text-gray-400 hover:text-white bg-transparent border-0 cursor-pointer",
                                onclick: move |_| setup.write().editor_mut(target).remove(index),
                                "✕"
                            }
                        }
                    }
                }
            }
        }
    }
}
