//! Monster drafts assembled on the encounter setup screen

use serde::{Deserialize, Serialize};

use crate::common::{none_if_blank, parse_int};
use crate::error::DomainError;
use crate::value_objects::Attack;

use super::AttackList;

/// Raw text of the shared monster fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterInput {
    pub name: String,
    pub max_hp: String,
    pub ac: String,
    pub initiative_mod: String,
}

/// Validated shared stats; nothing is consumed until these parse
struct MonsterStats {
    name: String,
    max_hp: i32,
    ac: i32,
    initiative_mod: i32,
}

impl MonsterInput {
    fn validate(&self) -> Result<MonsterStats, DomainError> {
        let name = none_if_blank(&self.name).ok_or(DomainError::MissingField("name"))?;
        Ok(MonsterStats {
            name: name.to_string(),
            max_hp: required_int(&self.max_hp, "max_hp")?,
            ac: required_int(&self.ac, "ac")?,
            initiative_mod: required_int(&self.initiative_mod, "initiative_mod")?,
        })
    }
}

fn required_int(value: &str, field: &'static str) -> Result<i32, DomainError> {
    parse_int(value).ok_or(DomainError::NotANumber(field))
}

/// A single named hostile combatant.
///
/// `attacks` is `None` (serialised as `null`) when the editor held no
/// attacks, which tells the backend "no attacks" rather than "empty list".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueMonsterDraft {
    pub name: String,
    pub max_hp: i32,
    pub ac: i32,
    pub initiative_mod: i32,
    pub is_enemy: bool,
    pub attacks: Option<Vec<Attack>>,
}

impl UniqueMonsterDraft {
    /// Validate `input` and claim every attack accumulated in `attacks`.
    ///
    /// On a validation error the accumulator is left untouched.
    pub fn from_input(input: &MonsterInput, attacks: &mut AttackList) -> Result<Self, DomainError> {
        let stats = input.validate()?;
        Ok(Self {
            name: stats.name,
            max_hp: stats.max_hp,
            ac: stats.ac,
            initiative_mod: stats.initiative_mod,
            is_enemy: true,
            attacks: attacks.commit(),
        })
    }

    pub fn attack_count(&self) -> usize {
        self.attacks.as_ref().map_or(0, Vec::len)
    }
}

/// A template replicated `count` times as identical combatants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMonsterDraft {
    pub name: String,
    pub count: u32,
    pub max_hp: i32,
    pub ac: i32,
    pub initiative_mod: i32,
    pub is_enemy: bool,
    pub attacks: Option<Vec<Attack>>,
}

impl GroupMonsterDraft {
    /// Validate `input` and `count`, then claim the accumulated attacks.
    ///
    /// On a validation error the accumulator is left untouched.
    pub fn from_input(
        input: &MonsterInput,
        count: &str,
        attacks: &mut AttackList,
    ) -> Result<Self, DomainError> {
        let stats = input.validate()?;
        let count = required_int(count, "count")?;
        let count = u32::try_from(count)
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| DomainError::validation("Group must contain at least one monster"))?;

        Ok(Self {
            name: stats.name,
            count,
            max_hp: stats.max_hp,
            ac: stats.ac,
            initiative_mod: stats.initiative_mod,
            is_enemy: true,
            attacks: attacks.commit(),
        })
    }

    pub fn attack_count(&self) -> usize {
        self.attacks.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::AttackInput;

    fn goblin() -> MonsterInput {
        MonsterInput {
            name: "Goblin".to_string(),
            max_hp: "7".to_string(),
            ac: "15".to_string(),
            initiative_mod: "2".to_string(),
        }
    }

    fn attack(name: &str) -> Attack {
        Attack::from_input(&AttackInput {
            name: name.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn unique_without_attacks_has_null_attacks() {
        let mut attacks = AttackList::new();
        let draft = UniqueMonsterDraft::from_input(&goblin(), &mut attacks).unwrap();

        assert_eq!(draft.attacks, None);
        assert!(draft.is_enemy);
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json["attacks"].is_null());
    }

    #[test]
    fn unique_claims_accumulated_attacks() {
        let mut attacks = AttackList::new();
        attacks.add(attack("Scimitar"));
        attacks.add(attack("Shortbow"));

        let draft = UniqueMonsterDraft::from_input(&goblin(), &mut attacks).unwrap();

        assert_eq!(draft.attack_count(), 2);
        assert!(attacks.is_empty());
    }

    #[test]
    fn invalid_input_leaves_attacks_in_place() {
        let mut attacks = AttackList::new();
        attacks.add(attack("Scimitar"));

        let mut input = goblin();
        input.ac = "n/a".to_string();
        let err = UniqueMonsterDraft::from_input(&input, &mut attacks).unwrap_err();

        assert_eq!(err, DomainError::NotANumber("ac"));
        assert_eq!(attacks.len(), 1);
    }

    #[test]
    fn blank_name_is_missing_field() {
        let mut input = goblin();
        input.name = "  ".to_string();
        let err = UniqueMonsterDraft::from_input(&input, &mut AttackList::new()).unwrap_err();
        assert_eq!(err, DomainError::MissingField("name"));
    }

    #[test]
    fn group_requires_positive_count() {
        let mut attacks = AttackList::new();
        attacks.add(attack("Bite"));

        assert_eq!(
            GroupMonsterDraft::from_input(&goblin(), "", &mut attacks).unwrap_err(),
            DomainError::NotANumber("count")
        );
        assert!(matches!(
            GroupMonsterDraft::from_input(&goblin(), "0", &mut attacks),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(attacks.len(), 1);

        let group = GroupMonsterDraft::from_input(&goblin(), "4", &mut attacks).unwrap();
        assert_eq!(group.count, 4);
        assert_eq!(group.attack_count(), 1);
        assert!(attacks.is_empty());
    }
}
