//! Application services
//!
//! Each service implements the use cases of one screen on top of the typed
//! `ApiPort`. Services depend on port traits, not concrete infrastructure.

pub mod campaign_service;
pub mod character_service;
pub mod encounter_service;
pub mod reference_service;

pub use campaign_service::CampaignService;
pub use character_service::CharacterService;
pub use encounter_service::{EncounterService, DEFAULT_ENCOUNTER_NAME};
pub use reference_service::{
    ReferenceCatalog, ReferenceDetail, ReferenceService, SEARCH_LIMIT, SUGGESTION_LIMIT,
};
