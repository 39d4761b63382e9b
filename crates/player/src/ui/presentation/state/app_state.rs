//! State shared across screens

use dioxus::prelude::*;
use skirmish_domain::CampaignId;

use crate::presentation::view_models::CurrentCampaign;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Campaign opened from the list
    pub current_campaign: Signal<Option<CurrentCampaign>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_campaign: Signal::new(None),
        }
    }

    pub fn open_campaign(&mut self, campaign: CurrentCampaign) {
        self.current_campaign.set(Some(campaign));
    }

    /// The stored campaign when it matches `id`, otherwise a placeholder
    /// named after the id
    pub fn campaign_for(&self, id: CampaignId) -> CurrentCampaign {
        self.current_campaign
            .read()
            .as_ref()
            .filter(|campaign| campaign.id == id)
            .cloned()
            .unwrap_or_else(|| CurrentCampaign::unnamed(id))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
