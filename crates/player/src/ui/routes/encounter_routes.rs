//! Encounter setup and tracker routes

use dioxus::prelude::*;
use skirmish_domain::EncounterId;

use super::{Route, ScreenLayout};
use crate::presentation::messages;
use crate::presentation::state::{use_app_state, use_toast};
use crate::presentation::views::encounter_setup::EncounterSetupView;
use crate::presentation::views::tracker::EncounterTrackerView;

/// Setup works on the campaign opened last; without one there is nothing to set up
#[component]
pub fn EncounterSetupRoute() -> Element {
    let app_state = use_app_state();
    let toast = use_toast();
    let navigator = use_navigator();

    let campaign = app_state.current_campaign.read().clone();

    let missing = campaign.is_none();
    use_effect(move || {
        if missing {
            tracing::warn!("Encounter setup opened without a campaign");
            toast.error(messages::SELECT_CAMPAIGN_FIRST);
            navigator.replace(Route::CampaignsRoute {});
        }
    });

    rsx! {
        ScreenLayout {
            page_title: "Подготовка схватки",
            if let Some(campaign) = campaign {
                EncounterSetupView { campaign }
            }
        }
    }
}

#[component]
pub fn EncounterTrackerRoute(encounter_id: i64) -> Element {
    rsx! {
        ScreenLayout {
            page_title: "Схватка",
            EncounterTrackerView { encounter_id: EncounterId::new(encounter_id) }
        }
    }
}
