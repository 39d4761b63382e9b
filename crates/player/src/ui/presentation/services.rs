//! Service providers for the presentation layer
//!
//! The composition root puts one `UiServices` into Dioxus context. Components
//! pull individual services through the `use_*_service` hooks and never touch
//! infrastructure adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{
    CampaignService, CharacterService, EncounterService, ReferenceService,
};
use crate::ports::outbound::ApiPort;

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub campaign: Arc<CampaignService<A>>,
    pub character: Arc<CharacterService<A>>,
    pub encounter: Arc<EncounterService<A>>,
    pub reference: Arc<ReferenceService<A>>,
}

impl<A: ApiPort + Clone> Services<A> {
    pub fn new(api: A) -> Self {
        Self {
            campaign: Arc::new(CampaignService::new(api.clone())),
            character: Arc::new(CharacterService::new(api.clone())),
            encounter: Arc::new(EncounterService::new(api.clone())),
            reference: Arc::new(ReferenceService::new(api)),
        }
    }
}

/// Hook to access the CampaignService from context
pub fn use_campaign_service() -> Arc<CampaignService<Api>> {
    let services = use_context::<UiServices>();
    services.campaign.clone()
}

/// Hook to access the CharacterService from context
pub fn use_character_service() -> Arc<CharacterService<Api>> {
    let services = use_context::<UiServices>();
    services.character.clone()
}

/// Hook to access the EncounterService from context
pub fn use_encounter_service() -> Arc<EncounterService<Api>> {
    let services = use_context::<UiServices>();
    services.encounter.clone()
}

/// Hook to access the ReferenceService from context
pub fn use_reference_service() -> Arc<ReferenceService<Api>> {
    let services = use_context::<UiServices>();
    services.reference.clone()
}
