//! Campaign list and per-campaign character routes

use dioxus::prelude::*;
use skirmish_domain::CampaignId;

use super::ScreenLayout;
use crate::presentation::state::use_app_state;
use crate::presentation::views::campaigns::CampaignsView;
use crate::presentation::views::characters::CharactersView;

#[component]
pub fn CampaignsRoute() -> Element {
    rsx! {
        ScreenLayout {
            page_title: "Кампании",
            CampaignsView {}
        }
    }
}

#[component]
pub fn CharactersRoute(campaign_id: i64) -> Element {
    let mut app_state = use_app_state();
    let campaign_id = CampaignId::new(campaign_id);

    // Deep links skip the campaign list; keep the current campaign in sync
    // so the setup screen knows which roster to load.
    use_effect(move || {
        let known = app_state
            .current_campaign
            .peek()
            .as_ref()
            .is_some_and(|current| current.id == campaign_id);
        if !known {
            let campaign = app_state.campaign_for(campaign_id);
            app_state.open_campaign(campaign);
        }
    });

    rsx! {
        ScreenLayout {
            page_title: "Персонажи",
            CharactersView { campaign_id }
        }
    }
}
