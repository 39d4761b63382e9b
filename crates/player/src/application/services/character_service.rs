//! Character Service - campaign character CRUD

use skirmish_domain::{CampaignId, CharacterDraft, CharacterId};
use skirmish_protocol::{CharacterData, CreateCharacterData, UpdateCharacterData};

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

#[derive(Clone)]
pub struct CharacterService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> CharacterService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn list_characters(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Vec<CharacterData>, ServiceError> {
        let path = format!("/campaigns/{}/characters", campaign_id);
        Ok(self.api.get(&path).await?)
    }

    pub async fn create_character(
        &self,
        campaign_id: CampaignId,
        draft: &CharacterDraft,
    ) -> Result<CharacterData, ServiceError> {
        let body = CreateCharacterData {
            campaign_id: campaign_id.get(),
            name: draft.name.clone(),
            ac: draft.ac,
            base_initiative: draft.base_initiative,
        };
        Ok(self.api.post("/characters", &body).await?)
    }

    pub async fn update_character(
        &self,
        character_id: CharacterId,
        draft: &CharacterDraft,
    ) -> Result<CharacterData, ServiceError> {
        let path = format!("/characters/{}", character_id);
        let body = UpdateCharacterData {
            name: draft.name.clone(),
            ac: draft.ac,
            base_initiative: draft.base_initiative,
        };
        Ok(self.api.put(&path, &body).await?)
    }

    pub async fn delete_character(&self, character_id: CharacterId) -> Result<(), ServiceError> {
        let path = format!("/characters/{}", character_id);
        Ok(self.api.delete(&path).await?)
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

    fn service(raw: MockRawApiPort) -> CharacterService<Api> {
        CharacterService::new(Api::new(Arc::new(raw)))
    }

    fn draft() -> CharacterDraft {
        CharacterDraft {
            name: "Арвен".into(),
            ac: 15,
            base_initiative: 3,
        }
    }

    #[tokio::test]
    async fn list_uses_campaign_path() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .with(eq("/campaigns/4/characters"))
            .times(1)
            .returning(|_| {
                Ok(json!([{"id": 9, "campaign_id": 4, "name": "Арвен", "ac": 15, "base_initiative": 3}]))
            });

        let chars = service(raw)
            .list_characters(CampaignId::new(4))
            .await
            .unwrap();
        assert_eq!(chars[0].base_initiative, 3);
    }

    #[tokio::test]
    async fn create_sends_campaign_id_and_stats() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                path == "/characters"
                    && body
                        == &json!({"campaign_id": 4, "name": "Арвен", "ac": 15, "base_initiative": 3})
            })
            .times(1)
            .returning(|_, body| {
                let mut created = body.clone();
                created["id"] = json!(10);
                Ok(created)
            });

        let created = service(raw)
            .create_character(CampaignId::new(4), &draft())
            .await
            .unwrap();
        assert_eq!(created.id, 10);
    }

    #[tokio::test]
    async fn update_puts_to_character_path() {
        let mut raw = MockRawApiPort::new();
        raw.expect_put_json()
            .withf(|path, body| {
                path == "/characters/10"
                    && body == &json!({"name": "Арвен", "ac": 15, "base_initiative": 3})
            })
            .times(1)
            .returning(|_, _| {
                Ok(json!({"id": 10, "campaign_id": 4, "name": "Арвен", "ac": 15, "base_initiative": 3}))
            });

        service(raw)
            .update_character(CharacterId::new(10), &draft())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_failure_is_reported() {
        let mut raw = MockRawApiPort::new();
        raw.expect_delete()
            .with(eq("/characters/10"))
            .times(1)
            .returning(|_| {
                Err(ApiError::HttpError {
                    status: 404,
                    body: "Character not found".into(),
                })
            });

        let err = service(raw)
            .delete_character(CharacterId::new(10))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Api(ApiError::HttpError { status: 404, .. })
        ));
    }
}
