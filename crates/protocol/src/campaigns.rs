use serde::{Deserialize, Serialize};

/// Campaign as returned by `GET /campaigns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignData {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// Body of `POST /campaigns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCampaignData {
    pub name: String,
}

/// Answer of `POST /campaigns/{id}/invite`: a bot deep link players open
/// to join the campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignInviteData {
    pub invite_token: String,
    pub invite_url: String,
}
