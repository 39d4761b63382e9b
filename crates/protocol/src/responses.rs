//! Small acknowledgement bodies returned by tracker actions

use serde::{Deserialize, Serialize};

/// Generic `{"status": "ok", ...}` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub encounter_id: Option<i64>,
}

/// Response of `POST /participants/{id}/hp_change`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpChangeResponse {
    pub status: String,
    pub participant_id: i64,
    #[serde(default)]
    pub current_hp: Option<i32>,
}
