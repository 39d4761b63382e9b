//! Campaign list, "my encounters", invites and the create-campaign form

use dioxus::prelude::*;
use skirmish_domain::CampaignId;
use skirmish_protocol::{CampaignData, CampaignInviteData, EncounterListItemData};

use crate::presentation::components::{EmptyState, ListRow, Modal, Pill, PillTone, TextInput};
use crate::presentation::messages;
use crate::presentation::services::{use_campaign_service, use_encounter_service};
use crate::presentation::state::{use_app_state, use_toast};
use crate::presentation::view_models::campaigns::{
    campaign_meta, campaign_name, encounter_is_live, encounter_meta, encounter_title,
};
use crate::presentation::view_models::{CurrentCampaign, LoadState};
use crate::routes::Route;

#[component]
pub fn CampaignsView() -> Element {
    let campaign_service = use_campaign_service();
    let encounter_service = use_encounter_service();
    let toast = use_toast();
    let mut app_state = use_app_state();
    let navigator = use_navigator();

    let mut campaigns = use_signal(LoadState::<Vec<CampaignData>>::default);
    let mut encounters = use_signal(Vec::<EncounterListItemData>::new);
    let mut new_name = use_signal(String::new);
    let mut reload = use_signal(|| 0u32);
    // Campaign name and the link generated for it
    let mut invite = use_signal(|| None::<(String, CampaignInviteData)>);

    {
        let service = campaign_service.clone();
        let toast = toast.clone();
        use_effect(move || {
            let _ = reload.read();
            let service = service.clone();
            let toast = toast.clone();
            spawn(async move {
                match service.list_campaigns().await {
                    Ok(list) => campaigns.set(LoadState::Loaded(list)),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to load campaigns");
                        campaigns.set(LoadState::Failed);
                        toast.error(messages::CAMPAIGNS_LOAD_FAILED);
                    }
                }
            });
        });
    }

    use_effect(move || {
        let service = encounter_service.clone();
        spawn(async move {
            match service.list_my_encounters().await {
                Ok(list) => encounters.set(list),
                Err(e) => tracing::warn!(error = %e, "Failed to load my encounters"),
            }
        });
    });

    let on_share = {
        let service = campaign_service.clone();
        let toast = toast.clone();
        use_callback(move |(campaign_id, name): (i64, String)| {
            let service = service.clone();
            let toast = toast.clone();
            spawn(async move {
                match service.create_invite(CampaignId::new(campaign_id)).await {
                    Ok(data) => invite.set(Some((name, data))),
                    Err(e) => {
                        tracing::error!(error = %e, campaign_id, "Failed to create invite");
                        toast.error(messages::CAMPAIGN_INVITE_FAILED);
                    }
                }
            });
        })
    };

    let on_create = move |_| {
        let name = match campaign_name(&new_name.read()) {
            Ok(name) => name,
            Err(message) => {
                toast.error(message);
                return;
            }
        };
        let service = campaign_service.clone();
        let toast = toast.clone();
        spawn(async move {
            match service.create_campaign(&name).await {
                Ok(campaign) => {
                    tracing::info!(campaign_id = campaign.id, "Campaign created");
                    toast.success(messages::CAMPAIGN_CREATED);
                    new_name.set(String::new());
                    *reload.write() += 1;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create campaign");
                    toast.error(messages::CAMPAIGN_CREATE_FAILED);
                }
            }
        });
    };

    let encounter_rows: Vec<(i64, String, String, bool)> = encounters
        .read()
        .iter()
        .map(|item| {
            (
                item.id,
                encounter_title(item),
                encounter_meta(item),
                encounter_is_live(item),
            )
        })
        .collect();
    let campaign_rows = LoadState::map(
        &*campaigns.read(),
        |list| -> Vec<(i64, String, String)> {
            list.iter()
                .map(|c| (c.id, c.name.clone(), campaign_meta(c)))
                .collect()
        },
    );

    let open_invite = invite.read().clone();

    rsx! {
        div {
            class: "flex flex-col gap-4 p-4 max-w-2xl mx-auto",

            div {
                class: "flex items-center justify-between",
                h1 { class: "text-white text-xl font-semibold m-0", "Кампании" }
                button {
                    class: "px-3 py-1 rounded bg-gray-800 text-white text-sm",
                    onclick: move |_| {
                        navigator.push(Route::ReferenceRoute {});
                    },
                    "📖 Справочник"
                }
            }

            section {
                class: "flex flex-col gap-2",
                h2 { class: "text-gray-400 text-sm uppercase m-0", "Мои схватки" }
                if encounter_rows.is_empty() {
                    EmptyState {
                        title: "Нет незавершённых схваток",
                        subtitle: "Когда начнёшь бой — он появится здесь",
                    }
                }
                for (encounter_id, title, meta, live) in encounter_rows {
                    ListRow {
                        key: "{encounter_id}",
                        title,
                        meta,
                        onclick: move |_| {
                            navigator.push(Route::EncounterTrackerRoute { encounter_id });
                        },
                        Pill {
                            label: "Продолжить",
                            tone: if live { PillTone::Ok } else { PillTone::Warn },
                        }
                    }
                }
            }

            section {
                class: "flex flex-col gap-2",
                h2 { class: "text-gray-400 text-sm uppercase m-0", "Кампании" }
                match campaign_rows {
                    LoadState::Loading => rsx! {
                        div { class: "text-gray-400", "Загрузка..." }
                    },
                    LoadState::Failed => rsx! {},
                    LoadState::Loaded(list) if list.is_empty() => rsx! {
                        EmptyState {
                            title: "Пока пусто",
                            subtitle: "Создай первую кампанию снизу",
                        }
                    },
                    LoadState::Loaded(list) => rsx! {
                        for (campaign_id, name, meta) in list {
                            ListRow {
                                key: "{campaign_id}",
                                title: name.clone(),
                                meta,
                                onclick: {
                                    let name = name.clone();
                                    move |_| {
                                        app_state.open_campaign(CurrentCampaign {
                                            id: CampaignId::new(campaign_id),
                                            name: name.clone(),
                                        });
                                        navigator.push(Route::CharactersRoute { campaign_id });
                                    }
                                },
                                button {
                                    class: "px-3 py-1 rounded bg-gray-800 text-white text-sm",
                                    title: "Пригласить игроков",
                                    onclick: {
                                        let name = name.clone();
                                        move |e: MouseEvent| {
                                            e.stop_propagation();
                                            on_share.call((campaign_id, name.clone()));
                                        }
                                    },
                                    "📤"
                                }
                            }
                        }
                    },
                }
            }

            div {
                class: "flex gap-2",
                TextInput {
                    value: new_name.read().clone(),
                    placeholder: "Название новой кампании",
                    oninput: move |value| new_name.set(value),
                }
                button {
                    class: "px-3 py-2 bg-purple-600 text-white rounded text-sm hover:bg-purple-500",
                    onclick: on_create,
                    "Создать"
                }
            }

            if let Some((name, data)) = open_invite {
                Modal {
                    title: format!("Приглашение в «{name}»"),
                    onclose: move |_| invite.set(None),
                    div { class: "text-gray-400 text-sm mb-2", "Отправь ссылку игрокам:" }
                    div {
                        class: "p-2 rounded bg-dark-bg border border-gray-700 text-white text-sm break-all select-all",
                        "{data.invite_url}"
                    }
                    a {
                        class: "inline-block mt-3 px-3 py-2 bg-purple-600 text-white rounded text-sm",
                        href: "{data.invite_url}",
                        target: "_blank",
                        "Открыть"
                    }
                }
            }
        }
    }
}
