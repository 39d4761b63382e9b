use serde::{Deserialize, Serialize};

/// Campaign character (player) as returned by `GET /campaigns/{id}/characters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterData {
    pub id: i64,
    #[serde(default)]
    pub campaign_id: Option<i64>,
    pub name: String,
    pub ac: i32,
    pub base_initiative: i32,
}

/// Body of `POST /characters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCharacterData {
    pub campaign_id: i64,
    pub name: String,
    pub ac: i32,
    pub base_initiative: i32,
}

/// Body of `PUT /characters/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCharacterData {
    pub name: String,
    pub ac: i32,
    pub base_initiative: i32,
}
