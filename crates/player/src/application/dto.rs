//! Converters between domain drafts and protocol types
//!
//! Both sides live in other crates, so conversions are free functions rather
//! than `From` impls.

use skirmish_domain::{
    Attack, EncounterPlayer, EncounterRoster, GroupMonsterDraft, UniqueMonsterDraft,
};
use skirmish_protocol::{
    AttackData, EncounterParticipantsData, GroupMonsterData, PlayerInEncounterData,
    UniqueMonsterData,
};

// =============================================================================
// Attack Conversions
// =============================================================================

pub fn attack_to_proto(attack: &Attack) -> AttackData {
    AttackData {
        name: attack.name.clone(),
        hit_bonus: attack.hit_bonus,
        damage_dice: attack.damage_dice,
        damage_die: attack.damage_die,
        damage_bonus: attack.damage_bonus,
        damage_type: attack.damage_type.clone(),
        range: attack.range.clone(),
    }
}

pub fn attack_from_proto(data: &AttackData) -> Attack {
    Attack {
        name: data.name.clone(),
        hit_bonus: data.hit_bonus,
        damage_dice: data.damage_dice,
        damage_die: data.damage_die,
        damage_bonus: data.damage_bonus,
        damage_type: data.damage_type.clone(),
        range: data.range.clone(),
    }
}

/// `None` stays `None`: the backend distinguishes "no attacks" from `[]`.
fn attacks_to_proto(attacks: &Option<Vec<Attack>>) -> Option<Vec<AttackData>> {
    attacks
        .as_ref()
        .map(|list| list.iter().map(attack_to_proto).collect())
}

// =============================================================================
// Participant Conversions
// =============================================================================

pub fn player_to_proto(player: &EncounterPlayer) -> PlayerInEncounterData {
    PlayerInEncounterData {
        character_id: player.character_id.get(),
        initiative_total: player.initiative_total,
    }
}

pub fn unique_monster_to_proto(draft: &UniqueMonsterDraft) -> UniqueMonsterData {
    UniqueMonsterData {
        name: draft.name.clone(),
        max_hp: draft.max_hp,
        ac: draft.ac,
        initiative_mod: draft.initiative_mod,
        is_enemy: draft.is_enemy,
        attacks: attacks_to_proto(&draft.attacks),
    }
}

pub fn group_monster_to_proto(draft: &GroupMonsterDraft) -> GroupMonsterData {
    GroupMonsterData {
        name: draft.name.clone(),
        count: draft.count,
        max_hp: draft.max_hp,
        ac: draft.ac,
        initiative_mod: draft.initiative_mod,
        is_enemy: draft.is_enemy,
        attacks: attacks_to_proto(&draft.attacks),
    }
}

/// Body of the participants call: only included players, with their edited
/// initiative, plus every monster draft.
pub fn roster_to_proto(roster: &EncounterRoster) -> EncounterParticipantsData {
    EncounterParticipantsData {
        players: roster
            .selected_players()
            .iter()
            .map(player_to_proto)
            .collect(),
        unique_monsters: roster
            .unique_monsters()
            .iter()
            .map(unique_monster_to_proto)
            .collect(),
        group_monsters: roster
            .group_monsters()
            .iter()
            .map(group_monster_to_proto)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_domain::{AttackList, CharacterId, MonsterInput, SetupPlayer};

    fn wolf_input() -> MonsterInput {
        MonsterInput {
            name: "Волк".into(),
            max_hp: "11".into(),
            ac: "13".into(),
            initiative_mod: "2".into(),
        }
    }

    #[test]
    fn roster_keeps_only_included_players_with_edited_initiative() {
        let mut roster = EncounterRoster::new(vec![
            SetupPlayer::new(CharacterId::new(1), "Арвен", 15, 3),
            SetupPlayer::new(CharacterId::new(2), "Борин", 17, 0),
        ]);
        roster.toggle_player(1);
        assert!(roster.set_initiative(1, "18"));

        let body = roster_to_proto(&roster);
        assert_eq!(
            body.players,
            vec![PlayerInEncounterData {
                character_id: 2,
                initiative_total: 18
            }]
        );
    }

    #[test]
    fn monster_without_attacks_serializes_null() {
        let mut attacks = AttackList::new();
        let draft = UniqueMonsterDraft::from_input(&wolf_input(), &mut attacks).unwrap();
        let mut roster = EncounterRoster::new(Vec::new());
        roster.add_unique(draft);

        let json = serde_json::to_value(roster_to_proto(&roster)).unwrap();
        assert!(json["unique_monsters"][0]["attacks"].is_null());
    }

    #[test]
    fn attack_round_trip_keeps_dice() {
        let attack = Attack {
            name: "Укус".into(),
            hit_bonus: 4,
            damage_dice: 2,
            damage_die: 4,
            damage_bonus: 2,
            damage_type: "колющий".into(),
            range: "ближний бой".into(),
        };
        assert_eq!(attack_from_proto(&attack_to_proto(&attack)), attack);
    }
}
