//! Campaign Service - list, create and share campaigns

use skirmish_domain::common::none_if_blank;
use skirmish_domain::{CampaignId, DomainError};
use skirmish_protocol::{CampaignData, CampaignInviteData, CreateCampaignData};

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct CampaignService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> CampaignService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Campaigns owned by the current user
    pub async fn list_campaigns(&self) -> Result<Vec<CampaignData>, ServiceError> {
        Ok(self.api.get("/campaigns").await?)
    }

    /// Create a campaign; the name is trimmed and must not be blank
    pub async fn create_campaign(&self, name: &str) -> Result<CampaignData, ServiceError> {
        let name = none_if_blank(name).ok_or(DomainError::MissingField("name"))?;
        let body = CreateCampaignData {
            name: name.to_string(),
        };
        Ok(self.api.post("/campaigns", &body).await?)
    }

    /// Generate an invite link; only the campaign's game master may
    pub async fn create_invite(
        &self,
        campaign_id: CampaignId,
    ) -> Result<CampaignInviteData, ServiceError> {
        let path = format!("/campaigns/{}/invite", campaign_id);
        let invite: CampaignInviteData = self.api.post(&path, &serde_json::json!({})).await?;
        tracing::info!(%campaign_id, "Campaign invite created");
        Ok(invite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use mockall::predicate::eq;
    use serde_json::json;
    use std::sync::Arc;

    fn service(raw: MockRawApiPort) -> CampaignService<Api> {
        CampaignService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn list_campaigns_reads_campaigns_path() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .with(eq("/campaigns"))
            .times(1)
            .returning(|_| Ok(json!([{"id": 1, "name": "Phandelver", "owner_id": 42}])));

        let campaigns = service(raw).list_campaigns().await.unwrap();
        assert_eq!(campaigns.len(), 1);
        assert_eq!(campaigns[0].name, "Phandelver");
    }

    #[tokio::test]
    async fn create_campaign_posts_trimmed_name() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| path == "/campaigns" && body == &json!({"name": "Curse of Strahd"}))
            .times(1)
            .returning(|_, _| Ok(json!({"id": 7, "name": "Curse of Strahd", "owner_id": 1})));

        let created = service(raw)
            .create_campaign("  Curse of Strahd  ")
            .await
            .unwrap();
        assert_eq!(created.id, 7);
    }

    #[tokio::test]
    async fn blank_name_never_reaches_backend() {
        let raw = MockRawApiPort::new();
        let err = service(raw).create_campaign("   ").await.unwrap_err();
        assert_eq!(err, ServiceError::Validation(DomainError::MissingField("name")));
    }

    #[tokio::test]
    async fn create_invite_posts_to_campaign_invite_path() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, _| path == "/campaigns/7/invite")
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "invite_token": "abc123",
                    "invite_url": "https://t.me/d20_bot?start=invite_abc123",
                    "expires_at": null
                }))
            });

        let invite = service(raw).create_invite(CampaignId::new(7)).await.unwrap();
        assert_eq!(invite.invite_token, "abc123");
        assert_eq!(invite.invite_url, "https://t.me/d20_bot?start=invite_abc123");
    }

    #[tokio::test]
    async fn invite_refused_for_non_gm() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().times(1).returning(|_, _| {
            Err(ApiError::HttpError {
                status: 403,
                body: "forbidden".into(),
            })
        });

        let err = service(raw).create_invite(CampaignId::new(7)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Api(ApiError::HttpError { status: 403, .. })
        ));
    }
}
