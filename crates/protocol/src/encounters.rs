use serde::{Deserialize, Serialize};

/// Encounter lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterStatus {
    Draft,
    Active,
    Finished,
}

impl EncounterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl std::fmt::Display for EncounterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of combatant in an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantType {
    Pc,
    NpcUnique,
    NpcGroup,
}

/// Attack as it travels over the wire.
///
/// Older backends omit the dice fields, so they default to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackData {
    pub name: String,
    pub hit_bonus: i32,
    #[serde(default)]
    pub damage_dice: u32,
    #[serde(default)]
    pub damage_die: u32,
    pub damage_bonus: i32,
    pub damage_type: String,
    pub range: String,
}

/// Body of `POST /encounters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEncounterData {
    pub campaign_id: i64,
    pub name: String,
}

/// Encounter as returned by `POST /encounters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterData {
    pub id: i64,
    pub campaign_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub status: EncounterStatus,
    #[serde(default)]
    pub gm_id: Option<i64>,
}

/// A campaign character entering the fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInEncounterData {
    pub character_id: i64,
    pub initiative_total: i32,
}

/// A single named monster; `attacks: null` means "no attacks"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueMonsterData {
    pub name: String,
    pub max_hp: i32,
    pub ac: i32,
    pub initiative_mod: i32,
    pub is_enemy: bool,
    pub attacks: Option<Vec<AttackData>>,
}

/// A monster template replicated `count` times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMonsterData {
    pub name: String,
    pub count: u32,
    pub max_hp: i32,
    pub ac: i32,
    pub initiative_mod: i32,
    pub is_enemy: bool,
    pub attacks: Option<Vec<AttackData>>,
}

/// Body of `POST /encounters/{id}/participants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterParticipantsData {
    pub players: Vec<PlayerInEncounterData>,
    pub unique_monsters: Vec<UniqueMonsterData>,
    pub group_monsters: Vec<GroupMonsterData>,
}

/// Body of `POST /encounters/{id}/start`; always sent as `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartEncounterData {}

/// Row of `GET /encounters/my`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterListItemData {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub status: EncounterStatus,
    pub campaign_id: i64,
    pub campaign_name: String,
}

/// Combatant in the tracker state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantData {
    pub id: i64,
    #[serde(rename = "type")]
    pub participant_type: ParticipantType,
    pub name: String,
    pub is_enemy: bool,
    #[serde(default)]
    pub max_hp: Option<i32>,
    #[serde(default)]
    pub current_hp: Option<i32>,
    #[serde(default)]
    pub ac: Option<i32>,
    pub initiative_total: i32,
    pub is_alive: bool,
    #[serde(default)]
    pub attacks: Option<Vec<AttackData>>,
}

/// Response of `GET /encounters/{id}/state`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterStateData {
    pub encounter_id: i64,
    pub campaign_id: i64,
    pub status: EncounterStatus,
    pub round: i32,
    pub current_index: i32,
    #[serde(default)]
    pub encounter_name: Option<String>,
    pub campaign_name: String,
    pub participants: Vec<ParticipantData>,
}

/// Body of `POST /participants/{id}/hp_change`; negative is damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpChangeData {
    pub delta: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_body_is_empty_object() {
        let json = serde_json::to_string(&StartEncounterData::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn null_attacks_are_serialized_as_null() {
        let monster = UniqueMonsterData {
            name: "Wolf".to_string(),
            max_hp: 11,
            ac: 13,
            initiative_mod: 2,
            is_enemy: true,
            attacks: None,
        };
        let value = serde_json::to_value(&monster).unwrap();
        assert!(value.get("attacks").is_some());
        assert!(value["attacks"].is_null());
    }

    #[test]
    fn attack_without_dice_fields_defaults_to_zero() {
        let attack: AttackData = serde_json::from_str(
            r#"{"name":"Bite","hit_bonus":4,"damage_bonus":2,"damage_type":"колющий","range":"5"}"#,
        )
        .unwrap();
        assert_eq!(attack.damage_dice, 0);
        assert_eq!(attack.damage_die, 0);
    }

    #[test]
    fn participant_type_uses_wire_names() {
        let state: EncounterStateData = serde_json::from_value(serde_json::json!({
            "encounter_id": 3,
            "campaign_id": 1,
            "status": "active",
            "round": 2,
            "current_index": 0,
            "campaign_name": "Phandelver",
            "participants": [{
                "id": 10,
                "type": "npc_group",
                "name": "Goblin 1",
                "is_enemy": true,
                "max_hp": null,
                "current_hp": null,
                "ac": 15,
                "initiative_total": 14,
                "is_alive": true
            }]
        }))
        .unwrap();
        assert_eq!(state.status, EncounterStatus::Active);
        assert_eq!(state.participants[0].participant_type, ParticipantType::NpcGroup);
        assert_eq!(state.participants[0].attacks, None);
    }
}
