//! Encounter tracker: initiative order, HP changes and turn control

use dioxus::prelude::*;
use skirmish_domain::{EncounterId, ParticipantId};

use crate::presentation::components::{EmptyState, Pill, PillTone};
use crate::presentation::messages;
use crate::presentation::services::use_encounter_service;
use crate::presentation::state::use_toast;
use crate::presentation::view_models::tracker::{parse_hp_delta, ParticipantRow};
use crate::presentation::view_models::{LoadState, TrackerView};
use crate::routes::Route;

#[component]
pub fn EncounterTrackerView(encounter_id: EncounterId) -> Element {
    let service = use_encounter_service();
    let toast = use_toast();
    let navigator = use_navigator();

    let mut tracker = use_signal(LoadState::<TrackerView>::default);
    let mut reload = use_signal(|| 0u32);
    let mut busy = use_signal(|| false);

    {
        let service = service.clone();
        let toast = toast.clone();
        use_effect(move || {
            let _ = reload.read();
            let service = service.clone();
            let toast = toast.clone();
            spawn(async move {
                match service.get_state(encounter_id).await {
                    Ok(state) => tracker.set(LoadState::Loaded(TrackerView::from_state(&state))),
                    Err(e) => {
                        tracing::error!(error = %e, %encounter_id, "Failed to load encounter state");
                        tracker.set(LoadState::Failed);
                        toast.error(messages::TRACKER_LOAD_FAILED);
                    }
                }
            });
        });
    }

    let on_next_turn = {
        let service = service.clone();
        let toast = toast.clone();
        move |_| {
            if busy() {
                return;
            }
            busy.set(true);
            let service = service.clone();
            let toast = toast.clone();
            spawn(async move {
                let result = service.next_turn(encounter_id).await;
                busy.set(false);
                match result {
                    Ok(_) => *reload.write() += 1,
                    Err(e) => {
                        tracing::error!(error = %e, %encounter_id, "Failed to advance turn");
                        toast.error(messages::TRACKER_NEXT_TURN_FAILED);
                    }
                }
            });
        }
    };

    let on_hp_change = {
        let service = service.clone();
        let toast = toast.clone();
        move |(participant_id, raw): (ParticipantId, String)| {
            let delta = match parse_hp_delta(&raw) {
                Ok(delta) => delta,
                Err(message) => {
                    toast.error(message);
                    return;
                }
            };
            let service = service.clone();
            let toast = toast.clone();
            spawn(async move {
                match service.change_hp(participant_id, delta).await {
                    Ok(_) => *reload.write() += 1,
                    Err(e) => {
                        tracing::error!(error = %e, %participant_id, delta, "Failed to change HP");
                        toast.error(messages::TRACKER_HP_FAILED);
                    }
                }
            });
        }
    };

    let on_finish = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        let service = service.clone();
        let toast = toast.clone();
        spawn(async move {
            let result = service.finish(encounter_id).await;
            busy.set(false);
            match result {
                Ok(_) => {
                    tracing::info!(%encounter_id, "Encounter finished");
                    toast.success(messages::TRACKER_FINISHED);
                    *reload.write() += 1;
                }
                Err(e) => {
                    tracing::error!(error = %e, %encounter_id, "Failed to finish encounter");
                    toast.error(messages::TRACKER_FINISH_FAILED);
                }
            }
        });
    };

    let view = tracker.read().clone();

    rsx! {
        div {
            class: "flex flex-col gap-4 p-4 max-w-2xl mx-auto",

            div {
                class: "flex items-center gap-2",
                button {
                    class: "px-3 py-1 rounded bg-gray-800 text-white text-sm",
                    onclick: move |_| {
                        navigator.push(Route::CampaignsRoute {});
                    },
                    "← Назад"
                }
            }

            match view {
                LoadState::Loading => rsx! {
                    div { class: "text-gray-400", "Загрузка..." }
                },
                LoadState::Failed => rsx! {
                    EmptyState { title: messages::TRACKER_LOAD_FAILED, subtitle: "" }
                },
                LoadState::Loaded(view) => rsx! {
                    div {
                        h1 { class: "text-white text-xl font-semibold m-0", "{view.title}" }
                        div { class: "text-gray-400 text-sm", "{view.subtitle}" }
                        div { class: "text-purple-300 text-sm", "{view.round}" }
                    }

                    if view.rows.is_empty() {
                        EmptyState { title: "Нет участников", subtitle: "" }
                    }
                    for row in view.rows {
                        ParticipantCard {
                            key: "{row.id}",
                            row: row.clone(),
                            finished: view.finished,
                            onhp: on_hp_change.clone(),
                        }
                    }

                    if !view.finished {
                        div {
                            class: "flex gap-2",
                            button {
                                class: "px-3 py-2 bg-purple-600 text-white rounded text-sm hover:bg-purple-500",
                                disabled: busy(),
                                onclick: on_next_turn,
                                "Следующий ход"
                            }
                            button {
                                class: "px-3 py-2 bg-red-700 text-white rounded text-sm",
                                disabled: busy(),
                                onclick: on_finish,
                                "Завершить"
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ParticipantCard(
    row: ParticipantRow,
    finished: bool,
    onhp: EventHandler<(ParticipantId, String)>,
) -> Element {
    let mut delta = use_signal(String::new);
    let participant_id = row.id;

    let border = if row.is_current {
        "border-purple-600"
    } else {
        "border-gray-700"
    };
    let opacity = if row.is_alive { "" } else { "opacity-50" };

    rsx! {
        div {
            class: "flex flex-col gap-1 p-3 rounded-lg bg-dark-surface border {border} {opacity}",
            div {
                class: "flex items-center justify-between gap-2",
                div {
                    class: "flex flex-col min-w-0",
                    div {
                        class: "text-white truncate",
                        if row.is_current { "▶ " }
                        "{row.name}"
                    }
                    div { class: "text-gray-400 text-sm", "{row.stats}" }
                }
                Pill {
                    label: row.kind,
                    tone: if !row.is_alive {
                        PillTone::Muted
                    } else if row.is_enemy {
                        PillTone::Warn
                    } else {
                        PillTone::Ok
                    },
                }
            }
            for (index, attack) in row.attacks.iter().enumerate() {
                div { key: "{index}", class: "text-gray-300 text-sm", "⚔️ {attack}" }
            }
            if !finished {
                div {
                    class: "flex gap-2 items-center",
                    input {
                        r#type: "number",
                        value: "{delta}",
                        placeholder: "±ХП",
                        class: "w-20 p-1 bg-dark-bg border border-gray-700 rounded text-white text-center",
                        oninput: move |e| delta.set(e.value()),
                    }
                    button {
                        class: "px-2 py-1 rounded bg-gray-800 text-white text-sm",
                        onclick: move |_| {
                            onhp.call((participant_id, delta()));
                            delta.set(String::new());
                        },
                        "OK"
                    }
                }
            }
        }
    }
}
