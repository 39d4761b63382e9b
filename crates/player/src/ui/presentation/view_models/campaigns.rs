//! Campaign list and the "my encounters" block

use skirmish_domain::common::none_if_blank;
use skirmish_protocol::{CampaignData, EncounterListItemData, EncounterStatus};

use crate::presentation::messages;

/// Trimmed campaign name, or the toast to show instead
pub fn campaign_name(raw: &str) -> Result<String, &'static str> {
    none_if_blank(raw)
        .map(str::to_string)
        .ok_or(messages::CAMPAIGN_NAME_REQUIRED)
}

pub fn campaign_meta(campaign: &CampaignData) -> String {
    format!("ID: {}", campaign.id)
}

pub fn encounter_title(item: &EncounterListItemData) -> String {
    match item.name.as_deref().and_then(none_if_blank) {
        Some(name) => name.to_string(),
        None => format!("Схватка #{}", item.id),
    }
}

pub fn encounter_meta(item: &EncounterListItemData) -> String {
    format!("Кампания \"{}\" • {}", item.campaign_name, item.status)
}

/// Active encounters get the green pill; drafts the amber one
pub fn encounter_is_live(item: &EncounterListItemData) -> bool {
    item.status == EncounterStatus::Active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: Option<&str>, status: EncounterStatus) -> EncounterListItemData {
        EncounterListItemData {
            id: 12,
            name: name.map(str::to_string),
            status,
            campaign_id: 3,
            campaign_name: "Туманы".into(),
        }
    }

    #[test]
    fn campaign_name_is_trimmed_and_required() {
        assert_eq!(campaign_name("  Туманы "), Ok("Туманы".to_string()));
        assert_eq!(campaign_name("   "), Err(messages::CAMPAIGN_NAME_REQUIRED));
    }

    #[test]
    fn unnamed_encounter_falls_back_to_id() {
        assert_eq!(encounter_title(&item(None, EncounterStatus::Draft)), "Схватка #12");
        assert_eq!(encounter_title(&item(Some(""), EncounterStatus::Draft)), "Схватка #12");
        assert_eq!(
            encounter_title(&item(Some("Засада"), EncounterStatus::Active)),
            "Засада"
        );
    }

    #[test]
    fn encounter_meta_shows_campaign_and_status() {
        let active = item(None, EncounterStatus::Active);
        assert_eq!(encounter_meta(&active), "Кампания \"Туманы\" • active");
        assert!(encounter_is_live(&active));
        assert!(!encounter_is_live(&item(None, EncounterStatus::Draft)));
    }
}
