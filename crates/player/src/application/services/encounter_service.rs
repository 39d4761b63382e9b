//! Encounter Service - start fights and drive the tracker
//!
//! Starting an encounter is three sequential calls: create, attach
//! participants, start. A failure at any step aborts the rest.

use skirmish_domain::common::trimmed;
use skirmish_domain::{CampaignId, EncounterId, EncounterRoster, ParticipantId};
use skirmish_protocol::{
    CreateEncounterData, EncounterData, EncounterListItemData, EncounterStateData, HpChangeData,
    HpChangeResponse, StartEncounterData, StatusResponse,
};

use crate::application::dto::roster_to_proto;
use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

/// Used when the encounter name field is left blank
pub const DEFAULT_ENCOUNTER_NAME: &str = "Схватка";

#[derive(Clone)]
pub struct EncounterService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> EncounterService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Draft and active encounters run by the current user
    pub async fn list_my_encounters(&self) -> Result<Vec<EncounterListItemData>, ServiceError> {
        Ok(self.api.get("/encounters/my").await?)
    }

    /// Create, populate and start an encounter; returns its id
    pub async fn start_encounter(
        &self,
        campaign_id: CampaignId,
        name: &str,
        roster: &EncounterRoster,
    ) -> Result<EncounterId, ServiceError> {
        let create = CreateEncounterData {
            campaign_id: campaign_id.get(),
            name: trimmed(name, DEFAULT_ENCOUNTER_NAME),
        };
        let encounter: EncounterData = self.api.post("/encounters", &create).await?;
        let encounter_id = EncounterId::new(encounter.id);
        tracing::debug!(%encounter_id, "Encounter created");

        let participants = roster_to_proto(roster);
        self.api
            .post_no_response(
                &format!("/encounters/{}/participants", encounter_id),
                &participants,
            )
            .await?;

        self.api
            .post_no_response(
                &format!("/encounters/{}/start", encounter_id),
                &StartEncounterData::default(),
            )
            .await?;

        tracing::info!(
            %encounter_id,
            players = participants.players.len(),
            unique = participants.unique_monsters.len(),
            groups = participants.group_monsters.len(),
            "Encounter started"
        );
        Ok(encounter_id)
    }

    /// Full game-master view of the fight
    pub async fn get_state(
        &self,
        encounter_id: EncounterId,
    ) -> Result<EncounterStateData, ServiceError> {
        let path = format!("/encounters/{}/state?role=gm", encounter_id);
        Ok(self.api.get(&path).await?)
    }

    pub async fn next_turn(&self, encounter_id: EncounterId) -> Result<StatusResponse, ServiceError> {
        let path = format!("/encounters/{}/next_turn", encounter_id);
        Ok(self.api.post(&path, &serde_json::json!({})).await?)
    }

    /// Negative `delta` is damage, positive is healing
    pub async fn change_hp(
        &self,
        participant_id: ParticipantId,
        delta: i32,
    ) -> Result<HpChangeResponse, ServiceError> {
        let path = format!("/participants/{}/hp_change", participant_id);
        Ok(self.api.post(&path, &HpChangeData { delta }).await?)
    }

    pub async fn finish(&self, encounter_id: EncounterId) -> Result<StatusResponse, ServiceError> {
        let path = format!("/encounters/{}/finish", encounter_id);
        Ok(self.api.post(&path, &serde_json::json!({})).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use mockall::predicate::eq;
    use mockall::Sequence;
    use serde_json::json;
    use skirmish_domain::{CharacterId, SetupPlayer};
    use std::sync::Arc;

    fn service(raw: MockRawApiPort) -> EncounterService<Api> {
        EncounterService::new(Api::new(Arc::new(raw)))
    }

    fn roster_with_one_player() -> EncounterRoster {
        let mut roster = EncounterRoster::new(vec![
            SetupPlayer::new(CharacterId::new(1), "Арвен", 15, 3),
            SetupPlayer::new(CharacterId::new(2), "Борин", 17, 1),
        ]);
        roster.toggle_player(0);
        roster.set_initiative(0, "19");
        roster
    }

    #[tokio::test]
    async fn list_my_encounters_reads_my_path() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .with(eq("/encounters/my"))
            .times(1)
            .returning(|_| {
                Ok(json!([{
                    "id": 5, "name": null, "status": "active",
                    "campaign_id": 1, "campaign_name": "Кампания"
                }]))
            });

        let list = service(raw).list_my_encounters().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 5);
        assert_eq!(list[0].name, None);
        assert_eq!(list[0].status, skirmish_protocol::EncounterStatus::Active);
    }

    #[tokio::test]
    async fn start_runs_create_participants_start_in_order() {
        let mut raw = MockRawApiPort::new();
        let mut seq = Sequence::new();

        raw.expect_post_json()
            .withf(|path, body| {
                path == "/encounters" && body == &json!({"campaign_id": 5, "name": "Засада у моста"})
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(json!({"id": 31, "campaign_id": 5, "name": "Засада у моста", "status": "draft", "gm_id": 1}))
            });
        raw.expect_post_no_response_json()
            .withf(|path, body| {
                path == "/encounters/31/participants"
                    && body
                        == &json!({
                            "players": [{"character_id": 1, "initiative_total": 19}],
                            "unique_monsters": [],
                            "group_monsters": []
                        })
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        raw.expect_post_no_response_json()
            .withf(|path, body| path == "/encounters/31/start" && body == &json!({}))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let id = service(raw)
            .start_encounter(CampaignId::new(5), " Засада у моста ", &roster_with_one_player())
            .await
            .unwrap();
        assert_eq!(id, EncounterId::new(31));
    }

    #[tokio::test]
    async fn blank_name_falls_back_to_default() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|_, body| body["name"] == DEFAULT_ENCOUNTER_NAME)
            .times(1)
            .returning(|_, _| Err(ApiError::RequestFailed("offline".into())));

        let result = service(raw)
            .start_encounter(CampaignId::new(5), "   ", &roster_with_one_player())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn participants_failure_skips_start() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().times(1).returning(|_, _| {
            Ok(json!({"id": 2, "campaign_id": 5, "name": "Схватка", "status": "draft"}))
        });
        raw.expect_post_no_response_json()
            .times(1)
            .returning(|_, _| {
                Err(ApiError::HttpError {
                    status: 422,
                    body: "bad participants".into(),
                })
            });

        let err = service(raw)
            .start_encounter(CampaignId::new(5), "", &roster_with_one_player())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Api(ApiError::HttpError { status: 422, .. })
        ));
    }

    #[tokio::test]
    async fn tracker_calls_hit_expected_paths() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .with(eq("/encounters/3/state?role=gm"))
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "encounter_id": 3, "campaign_id": 1, "status": "active",
                    "round": 1, "current_index": 0, "campaign_name": "C",
                    "participants": []
                }))
            });
        raw.expect_post_json()
            .withf(|path, _| path == "/encounters/3/next_turn")
            .times(1)
            .returning(|_, _| Ok(json!({"status": "ok", "encounter_id": 3})));
        raw.expect_post_json()
            .withf(|path, body| path == "/participants/8/hp_change" && body == &json!({"delta": -5}))
            .times(1)
            .returning(|_, _| Ok(json!({"status": "ok", "participant_id": 8, "current_hp": 2})));
        raw.expect_post_json()
            .withf(|path, _| path == "/encounters/3/finish")
            .times(1)
            .returning(|_, _| Ok(json!({"status": "finished", "encounter_id": 3})));

        let svc = service(raw);
        let id = EncounterId::new(3);
        assert_eq!(svc.get_state(id).await.unwrap().round, 1);
        assert_eq!(svc.next_turn(id).await.unwrap().status, "ok");
        let hp = svc.change_hp(ParticipantId::new(8), -5).await.unwrap();
        assert_eq!(hp.current_hp, Some(2));
        assert_eq!(svc.finish(id).await.unwrap().status, "finished");
    }
}
