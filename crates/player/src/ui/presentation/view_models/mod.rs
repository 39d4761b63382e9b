//! View-models
//!
//! Screen state as plain structs. Components render from them and route
//! events back through their methods, so every transition is testable
//! without a Dioxus runtime.

pub mod attack_editor;
pub mod campaigns;
pub mod characters;
pub mod debounce;
pub mod encounter_setup;
pub mod reference_browser;
pub mod tracker;

pub use attack_editor::{AttackEditor, AttackField, AttackTarget};
pub use characters::CharacterForms;
pub use debounce::{Debouncer, SEARCH_DEBOUNCE_MS, TOAST_VISIBLE_MS};
pub use encounter_setup::{EncounterSetup, StartRequest};
pub use reference_browser::ReferenceBrowser;
pub use tracker::TrackerView;

use skirmish_domain::CampaignId;

/// Campaign opened from the list; carried into the characters and setup screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentCampaign {
    pub id: CampaignId,
    pub name: String,
}

impl CurrentCampaign {
    /// Used when a screen is reached by URL without passing through the list
    pub fn unnamed(id: CampaignId) -> Self {
        Self {
            id,
            name: format!("Кампания #{id}"),
        }
    }
}

/// Async load lifecycle of a list or record
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed,
}

impl<T> LoadState<T> {
    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Loaded(value) => LoadState::Loaded(f(value)),
            Self::Failed => LoadState::Failed,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keeps_the_lifecycle_stage() {
        let loaded = LoadState::Loaded(vec![1, 2, 3]);
        assert_eq!(loaded.map(Vec::len), LoadState::Loaded(3));
        assert_eq!(LoadState::<Vec<i32>>::Failed.map(Vec::len), LoadState::Failed);
        assert_eq!(LoadState::<Vec<i32>>::default().map(Vec::len), LoadState::Loading);
    }

    #[test]
    fn unnamed_campaign_is_labelled_by_id() {
        let campaign = CurrentCampaign::unnamed(CampaignId::new(9));
        assert_eq!(campaign.name, "Кампания #9");
    }
}
