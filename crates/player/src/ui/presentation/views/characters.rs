//! Characters of one campaign: list, inline edit, delete, create

use dioxus::prelude::*;
use skirmish_domain::{CampaignId, CharacterId};
use skirmish_protocol::CharacterData;

use crate::presentation::components::{EmptyState, ListRow, Modal, TextInput};
use crate::presentation::messages;
use crate::presentation::services::use_character_service;
use crate::presentation::state::{use_app_state, use_toast};
use crate::presentation::view_models::characters::character_meta;
use crate::presentation::view_models::{CharacterForms, LoadState};
use crate::routes::Route;

#[component]
pub fn CharactersView(campaign_id: CampaignId) -> Element {
    let service = use_character_service();
    let toast = use_toast();
    let app_state = use_app_state();
    let navigator = use_navigator();

    let campaign = app_state.campaign_for(campaign_id);
    let mut characters = use_signal(LoadState::<Vec<CharacterData>>::default);
    let mut forms = use_signal(CharacterForms::default);
    let mut reload = use_signal(|| 0u32);

    {
        let service = service.clone();
        let toast = toast.clone();
        use_effect(move || {
            let _ = reload.read();
            let service = service.clone();
            let toast = toast.clone();
            spawn(async move {
                match service.list_characters(campaign_id).await {
                    Ok(list) => characters.set(LoadState::Loaded(list)),
                    Err(e) => {
                        tracing::error!(error = %e, %campaign_id, "Failed to load characters");
                        characters.set(LoadState::Failed);
                        toast.error(messages::CHARACTERS_LOAD_FAILED);
                    }
                }
            });
        });
    }

    let on_create = {
        let service = service.clone();
        let toast = toast.clone();
        move |_| {
            let draft = match forms.read().create_draft() {
                Ok(draft) => draft,
                Err(message) => {
                    toast.error(message);
                    return;
                }
            };
            let service = service.clone();
            let toast = toast.clone();
            spawn(async move {
                match service.create_character(campaign_id, &draft).await {
                    Ok(_) => {
                        toast.success(messages::CHARACTER_CREATED);
                        forms.write().clear_create();
                        *reload.write() += 1;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to create character");
                        toast.error(messages::CHARACTER_CREATE_FAILED);
                    }
                }
            });
        }
    };

    let on_save_edit = {
        let service = service.clone();
        let toast = toast.clone();
        move |_| {
            let (character_id, draft) = match forms.read().edit_draft() {
                Ok(edit) => edit,
                Err(message) => {
                    toast.error(message);
                    return;
                }
            };
            let service = service.clone();
            let toast = toast.clone();
            spawn(async move {
                match service.update_character(character_id, &draft).await {
                    Ok(_) => {
                        toast.success(messages::CHARACTER_UPDATED);
                        forms.write().cancel_edit();
                        *reload.write() += 1;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, %character_id, "Failed to update character");
                        toast.error(messages::CHARACTER_UPDATE_FAILED);
                    }
                }
            });
        }
    };

    let on_confirm_delete = move |_| {
        let Some(character_id) = forms.write().confirm_delete() else {
            return;
        };
        let service = service.clone();
        let toast = toast.clone();
        spawn(async move {
            match service.delete_character(character_id).await {
                Ok(()) => {
                    toast.success(messages::CHARACTER_DELETED);
                    *reload.write() += 1;
                }
                Err(e) => {
                    tracing::error!(error = %e, %character_id, "Failed to delete character");
                    toast.error(messages::CHARACTER_DELETE_FAILED);
                }
            }
        });
    };

    let rows = characters.read().clone();
    let current_forms = forms.read().clone();

    rsx! {
        div {
            class: "flex flex-col gap-4 p-4 max-w-2xl mx-auto",

            div {
                class: "flex items-center justify-between gap-2",
                button {
                    class: "px-3 py-1 rounded bg-gray-800 text-white text-sm",
                    onclick: move |_| {
                        navigator.push(Route::CampaignsRoute {});
                    },
                    "← Назад"
                }
                button {
                    class: "px-3 py-1 rounded bg-purple-600 text-white text-sm hover:bg-purple-500",
                    onclick: move |_| {
                        navigator.push(Route::EncounterSetupRoute {});
                    },
                    "⚔️ Начать схватку"
                }
            }

            div {
                h1 { class: "text-white text-xl font-semibold m-0", "{campaign.name}" }
                div { class: "text-gray-400 text-sm", "Персонажи кампании #{campaign_id}" }
            }

            match rows {
                LoadState::Loading => rsx! {
                    div { class: "text-gray-400", "Загрузка..." }
                },
                LoadState::Failed => rsx! {},
                LoadState::Loaded(list) if list.is_empty() => rsx! {
                    EmptyState { title: "Персонажей нет", subtitle: "Добавь первого снизу" }
                },
                LoadState::Loaded(list) => rsx! {
                    for character in list {
                        if let Some(edit) = current_forms
                            .editing
                            .as_ref()
                            .filter(|edit| edit.id.get() == character.id)
                        {
                            div {
                                key: "{character.id}",
                                class: "flex flex-col gap-2 p-3 rounded-lg bg-dark-surface border border-purple-600",
                                TextInput {
                                    value: edit.input.name.clone(),
                                    placeholder: "Имя",
                                    oninput: move |value| {
                                        if let Some(edit) = forms.write().editing.as_mut() {
                                            edit.input.name = value;
                                        }
                                    },
                                }
                                div {
                                    class: "flex gap-2",
                                    TextInput {
                                        value: edit.input.ac.clone(),
                                        placeholder: "КД",
                                        input_type: "number",
                                        oninput: move |value| {
                                            if let Some(edit) = forms.write().editing.as_mut() {
                                                edit.input.ac = value;
                                            }
                                        },
                                    }
                                    TextInput {
                                        value: edit.input.base_initiative.clone(),
                                        placeholder: "ИНИЦ",
                                        input_type: "number",
                                        oninput: move |value| {
                                            if let Some(edit) = forms.write().editing.as_mut() {
                                                edit.input.base_initiative = value;
                                            }
                                        },
                                    }
                                }
                                div {
                                    class: "flex gap-2 justify-end",
                                    button {
                                        class: "px-3 py-1 rounded bg-gray-800 text-white text-sm",
                                        onclick: move |_| forms.write().cancel_edit(),
                                        "Отмена"
                                    }
                                    button {
                                        class: "px-3 py-1 rounded bg-purple-600 text-white text-sm hover:bg-purple-500",
                                        onclick: on_save_edit.clone(),
                                        "Сохранить"
                                    }
                                }
                            }
                        } else {
                            CharacterRow { key: "{character.id}", character: character.clone(), forms }
                        }
                    }
                },
            }

            div {
                class: "flex flex-col gap-2 p-3 rounded-lg bg-dark-surface border border-gray-700",
                TextInput {
                    value: current_forms.create.name.clone(),
                    placeholder: "Имя персонажа",
                    oninput: move |value| forms.write().create.name = value,
                }
                div {
                    class: "flex gap-2",
                    TextInput {
                        value: current_forms.create.ac.clone(),
                        placeholder: "КД",
                        input_type: "number",
                        oninput: move |value| forms.write().create.ac = value,
                    }
                    TextInput {
                        value: current_forms.create.base_initiative.clone(),
                        placeholder: "ИНИЦ",
                        input_type: "number",
                        oninput: move |value| forms.write().create.base_initiative = value,
                    }
                    button {
                        class: "px-3 py-2 bg-purple-600 text-white rounded text-sm hover:bg-purple-500",
                        onclick: on_create,
                        "Добавить"
                    }
                }
            }

            if current_forms.pending_delete.is_some() {
                Modal {
                    title: messages::CHARACTER_DELETE_CONFIRM,
                    onclose: move |_| forms.write().cancel_delete(),
                    div {
                        class: "flex gap-2 justify-end",
                        button {
                            class: "px-3 py-1 rounded bg-gray-800 text-white text-sm",
                            onclick: move |_| forms.write().cancel_delete(),
                            "Отмена"
                        }
                        button {
                            class: "px-3 py-1 rounded bg-red-700 text-white text-sm",
                            onclick: on_confirm_delete,
                            "Удалить"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CharacterRow(character: CharacterData, forms: Signal<CharacterForms>) -> Element {
    let character_id = CharacterId::new(character.id);
    let meta = character_meta(&character);

    rsx! {
        ListRow {
            title: character.name.clone(),
            meta,
            div {
                class: "flex gap-1",
                button {
                    class: "px-2 py-1 rounded bg-gray-800 text-white text-sm",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        forms.write().begin_edit(&character);
                    },
                    "✏️"
                }
                button {
                    class: "px-2 py-1 rounded bg-gray-800 text-white text-sm",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        forms.write().request_delete(character_id);
                    },
                    "🗑"
                }
            }
        }
    }
}
