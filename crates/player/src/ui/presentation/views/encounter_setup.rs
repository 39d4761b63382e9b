//! Encounter setup: pick players, add monsters, start the fight

use dioxus::prelude::*;
use skirmish_domain::{parse_int, MonsterInput};

use crate::presentation::components::{
    AttackEditorPanel, EmptyState, ListRow, Pill, PillTone, TextInput,
};
use crate::presentation::messages;
use crate::presentation::services::{use_character_service, use_encounter_service};
use crate::presentation::state::use_toast;
use crate::presentation::view_models::encounter_setup::{
    group_meta, group_title, player_meta, player_pill, unique_meta,
};
use crate::presentation::view_models::{AttackTarget, CurrentCampaign, EncounterSetup};
use crate::routes::Route;

#[component]
pub fn EncounterSetupView(campaign: CurrentCampaign) -> Element {
    let character_service = use_character_service();
    let encounter_service = use_encounter_service();
    let toast = use_toast();
    let navigator = use_navigator();

    let campaign_id = campaign.id;
    let mut setup = use_signal(move || EncounterSetup::new(Some(campaign)));
    let mut starting = use_signal(|| false);

    {
        let toast = toast.clone();
        use_effect(move || {
            let service = character_service.clone();
            let toast = toast.clone();
            spawn(async move {
                match service.list_characters(campaign_id).await {
                    Ok(list) => setup.write().load_players(&list),
                    Err(e) => {
                        tracing::error!(error = %e, %campaign_id, "Failed to load setup players");
                        toast.error(messages::SETUP_PLAYERS_LOAD_FAILED);
                    }
                }
            });
        });
    }

    let on_add_unique = {
        let toast = toast.clone();
        move |_| {
            let added = setup.write().add_unique();
            match added {
                Ok(message) => toast.success(message),
                Err(message) => toast.error(message),
            }
        }
    };

    let on_add_group = {
        let toast = toast.clone();
        move |_| {
            let added = setup.write().add_group();
            match added {
                Ok(message) => toast.success(message),
                Err(message) => toast.error(message),
            }
        }
    };

    let on_start = move |_| {
        if *starting.read() {
            return;
        }
        let request = match setup.read().start_request() {
            Ok(request) => request,
            Err(message) => {
                toast.error(message);
                return;
            }
        };
        let service = encounter_service.clone();
        let toast = toast.clone();
        starting.set(true);
        spawn(async move {
            let result = service
                .start_encounter(request.campaign_id, &request.name, &request.roster)
                .await;
            starting.set(false);
            match result {
                Ok(encounter_id) => {
                    toast.success(messages::ENCOUNTER_STARTED);
                    navigator.push(Route::EncounterTrackerRoute {
                        encounter_id: encounter_id.get(),
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to start encounter");
                    toast.error(messages::ENCOUNTER_START_FAILED);
                }
            }
        });
    };

    let state = setup.read().clone();
    let subtitle = state.subtitle();
    let players: Vec<(usize, String, String, String, bool, &'static str)> = state
        .roster
        .players()
        .iter()
        .enumerate()
        .map(|(index, p)| {
            (
                index,
                p.name.clone(),
                player_meta(p),
                p.initiative_total.to_string(),
                p.include,
                player_pill(p),
            )
        })
        .collect();
    let uniques: Vec<(usize, String, String)> = state
        .roster
        .unique_monsters()
        .iter()
        .enumerate()
        .map(|(index, m)| (index, m.name.clone(), unique_meta(m)))
        .collect();
    let groups: Vec<(usize, String, String)> = state
        .roster
        .group_monsters()
        .iter()
        .enumerate()
        .map(|(index, g)| (index, group_title(g), group_meta(g)))
        .collect();

    rsx! {
        div {
            class: "flex flex-col gap-4 p-4 max-w-2xl mx-auto",

            div {
                class: "flex items-center gap-2",
                button {
                    class: "px-3 py-1 rounded bg-gray-800 text-white text-sm",
                    onclick: move |_| {
                        navigator.push(Route::CharactersRoute {
                            campaign_id: campaign_id.get(),
                        });
                    },
                    "← Назад"
                }
            }

            div {
                h1 { class: "text-white text-xl font-semibold m-0", "Подготовка схватки" }
                div { class: "text-gray-400 text-sm", "{subtitle}" }
            }

            section {
                class: "flex flex-col gap-2",
                h2 { class: "text-gray-400 text-sm uppercase m-0", "Игроки" }
                if players.is_empty() {
                    EmptyState {
                        title: "Нет персонажей",
                        subtitle: "Вернись и добавь хотя бы одного",
                    }
                }
                for (index, name, meta, initiative, include, pill) in players {
                    ListRow {
                        key: "{index}",
                        title: name,
                        meta,
                        highlighted: include,
                        onclick: move |_| setup.write().toggle_player(index),
                        div {
                            class: "flex items-center gap-2",
                            onclick: move |e: MouseEvent| e.stop_propagation(),
                            input {
                                r#type: "number",
                                value: "{initiative}",
                                class: "w-16 p-1 bg-dark-bg border border-gray-700 rounded text-white text-center",
                                oninput: move |e| {
                                    let value = e.value();
                                    if parse_int(&value).is_some() {
                                        setup.write().set_initiative(index, &value);
                                    }
                                },
                            }
                            Pill {
                                label: pill,
                                tone: if include { PillTone::Ok } else { PillTone::Muted },
                            }
                        }
                    }
                }
            }

            section {
                class: "flex flex-col gap-2",
                h2 { class: "text-gray-400 text-sm uppercase m-0", "Уникальные мобы" }
                if uniques.is_empty() {
                    EmptyState {
                        title: "Пока нет уникальных мобов",
                        subtitle: "Добавь ниже (имя, ХП, КД, ИНИЦ+)",
                    }
                }
                for (index, name, meta) in uniques {
                    ListRow {
                        key: "{index}",
                        title: name,
                        meta,
                        RemoveButton { onremove: move |_| setup.write().remove_unique(index) }
                    }
                }
                MonsterFields {
                    input: state.unique_input.clone(),
                    onchange: move |input| setup.write().unique_input = input,
                }
                AttackEditorPanel { setup, target: AttackTarget::Unique }
                button {
                    class: "self-start px-3 py-2 bg-purple-600 text-white rounded text-sm hover:bg-purple-500",
                    onclick: on_add_unique,
                    "Добавить моба"
                }
            }

            section {
                class: "flex flex-col gap-2",
                h2 { class: "text-gray-400 text-sm uppercase m-0", "Группы" }
                if groups.is_empty() {
                    EmptyState {
                        title: "Пока нет групп",
                        subtitle: "Добавь ниже (имя, xN, ХП, КД, ИНИЦ+)",
                    }
                }
                for (index, title, meta) in groups {
                    ListRow {
                        key: "{index}",
                        title,
                        meta,
                        RemoveButton { onremove: move |_| setup.write().remove_group(index) }
                    }
                }
                TextInput {
                    value: state.group_count.clone(),
                    placeholder: "Количество (xN)",
                    input_type: "number",
                    oninput: move |value| setup.write().group_count = value,
                }
                MonsterFields {
                    input: state.group_input.clone(),
                    onchange: move |input| setup.write().group_input = input,
                }
                AttackEditorPanel { setup, target: AttackTarget::Group }
                button {
                    class: "self-start px-3 py-2 bg-purple-600 text-white rounded text-sm hover:bg-purple-500",
                    onclick: on_add_group,
                    "Добавить группу"
                }
            }

            div {
                class: "flex gap-2",
                TextInput {
                    value: state.encounter_name.clone(),
                    placeholder: messages::ENCOUNTER_NAME_PLACEHOLDER,
                    oninput: move |value| setup.write().encounter_name = value,
                }
                button {
                    class: "px-3 py-2 bg-purple-600 text-white rounded text-sm hover:bg-purple-500",
                    disabled: *starting.read(),
                    onclick: on_start,
                    "Начать схватку"
                }
            }
        }
    }
}

/// Shared name/HP/AC/initiative inputs of both monster forms
#[component]
fn MonsterFields(input: MonsterInput, onchange: EventHandler<MonsterInput>) -> Element {
    let name = input.clone();
    let hp = input.clone();
    let ac = input.clone();
    let init = input.clone();

    rsx! {
        div {
            class: "grid grid-cols-2 gap-2",
            TextInput {
                value: input.name.clone(),
                placeholder: "Имя",
                oninput: move |value| onchange.call(MonsterInput { name: value, ..name.clone() }),
            }
            TextInput {
                value: input.max_hp.clone(),
                placeholder: "ХП",
                input_type: "number",
                oninput: move |value| onchange.call(MonsterInput { max_hp: value, ..hp.clone() }),
            }
            TextInput {
                value: input.ac.clone(),
                placeholder: "КД",
                input_type: "number",
                oninput: move |value| onchange.call(MonsterInput { ac: value, ..ac.clone() }),
            }
            TextInput {
                value: input.initiative_mod.clone(),
                placeholder: "ИНИЦ+",
                input_type: "number",
                oninput: move |value| {
                    onchange.call(MonsterInput { initiative_mod: value, ..init.clone() })
                },
            }
        }
    }
}

#[component]
fn RemoveButton(onremove: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "text-gray-400 hover:text-white bg-transparent border-0 cursor-pointer",
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                onremove.call(());
            },
            "✕"
        }
    }
}
