//! Encounter tracker rows built from the game-master state

use skirmish_domain::{parse_int, ParticipantId};
use skirmish_protocol::{EncounterStateData, EncounterStatus, ParticipantData, ParticipantType};

use crate::application::dto::attack_from_proto;
use crate::presentation::messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub id: ParticipantId,
    pub name: String,
    pub kind: &'static str,
    pub is_enemy: bool,
    pub is_alive: bool,
    pub is_current: bool,
    pub stats: String,
    pub attacks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerView {
    pub title: String,
    pub subtitle: String,
    pub round: String,
    pub finished: bool,
    pub rows: Vec<ParticipantRow>,
}

impl TrackerView {
    pub fn from_state(state: &EncounterStateData) -> Self {
        let title = state
            .encounter_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("Схватка #{}", state.encounter_id));

        let current = usize::try_from(state.current_index).ok();
        let rows = state
            .participants
            .iter()
            .enumerate()
            .map(|(idx, p)| participant_row(p, current == Some(idx)))
            .collect();

        Self {
            title,
            subtitle: format!("Кампания \"{}\" • {}", state.campaign_name, state.status),
            round: format!("Раунд {}", state.round),
            finished: state.status == EncounterStatus::Finished,
            rows,
        }
    }

    pub fn current(&self) -> Option<&ParticipantRow> {
        self.rows.iter().find(|row| row.is_current)
    }
}

fn kind_label(kind: ParticipantType) -> &'static str {
    match kind {
        ParticipantType::Pc => "Игрок",
        ParticipantType::NpcUnique => "Моб",
        ParticipantType::NpcGroup => "Группа",
    }
}

fn participant_row(p: &ParticipantData, is_current: bool) -> ParticipantRow {
    let mut stats = Vec::new();
    match (p.current_hp, p.max_hp) {
        (Some(current), Some(max)) => stats.push(format!("ХП: {current}/{max}")),
        (Some(current), None) => stats.push(format!("ХП: {current}")),
        _ => {}
    }
    if let Some(ac) = p.ac {
        stats.push(format!("КД: {ac}"));
    }
    stats.push(format!("ИНИЦ: {}", p.initiative_total));

    let attacks = p
        .attacks
        .iter()
        .flatten()
        .map(|data| {
            let attack = attack_from_proto(data);
            format!("{}: {}", attack.name, attack.summary())
        })
        .collect();

    ParticipantRow {
        id: p.id.into(),
        name: p.name.clone(),
        kind: kind_label(p.participant_type),
        is_enemy: p.is_enemy,
        is_alive: p.is_alive,
        is_current,
        stats: stats.join(", "),
        attacks,
    }
}

/// HP adjustment typed by the game master; negative is damage
pub fn parse_hp_delta(raw: &str) -> Result<i32, &'static str> {
    parse_int(raw)
        .filter(|delta| *delta != 0)
        .ok_or(messages::TRACKER_HP_INVALID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state() -> EncounterStateData {
        serde_json::from_value(json!({
            "encounter_id": 4,
            "campaign_id": 1,
            "status": "active",
            "round": 2,
            "current_index": 1,
            "encounter_name": null,
            "campaign_name": "Туманы",
            "participants": [
                {
                    "id": 10, "type": "pc", "name": "Арвен", "is_enemy": false,
                    "max_hp": null, "current_hp": null, "ac": 15,
                    "initiative_total": 18, "is_alive": true, "attacks": null
                },
                {
                    "id": 11, "type": "npc_unique", "name": "Огр", "is_enemy": true,
                    "max_hp": 59, "current_hp": 40, "ac": 11,
                    "initiative_total": 7, "is_alive": true,
                    "attacks": [{
                        "name": "Дубина", "hit_bonus": 6, "damage_dice": 2,
                        "damage_die": 8, "damage_bonus": 4,
                        "damage_type": "дробящий", "range": "ближний бой"
                    }]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn view_marks_current_participant() {
        let view = TrackerView::from_state(&state());
        assert_eq!(view.title, "Схватка #4");
        assert_eq!(view.round, "Раунд 2");
        assert!(!view.finished);
        assert_eq!(view.current().map(|r| r.name.as_str()), Some("Огр"));
    }

    #[test]
    fn rows_render_hp_and_attacks() {
        let view = TrackerView::from_state(&state());
        assert_eq!(view.rows[0].stats, "КД: 15, ИНИЦ: 18");
        assert_eq!(view.rows[1].stats, "ХП: 40/59, КД: 11, ИНИЦ: 7");
        assert_eq!(view.rows[1].kind, "Моб");
        assert_eq!(
            view.rows[1].attacks,
            vec!["Дубина: +6 попадание, 2d8+4 урон (дробящий), ближний бой"]
        );
    }

    #[test]
    fn hp_delta_must_be_non_zero_number() {
        assert_eq!(parse_hp_delta("-7"), Ok(-7));
        assert_eq!(parse_hp_delta("+3"), Ok(3));
        assert_eq!(parse_hp_delta("0"), Err(messages::TRACKER_HP_INVALID));
        assert_eq!(parse_hp_delta("урон"), Err(messages::TRACKER_HP_INVALID));
    }
}
