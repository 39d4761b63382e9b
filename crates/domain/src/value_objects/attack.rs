//! Monster attacks

use serde::{Deserialize, Serialize};

use crate::common::{none_if_blank, parse_int_or_zero, trimmed};
use crate::error::DomainError;

use super::damage::{format_modifier, DamageRoll};

/// Damage type used when the editor field is left blank
pub const DEFAULT_DAMAGE_TYPE: &str = "физический";

/// Range used when the editor field is left blank
pub const DEFAULT_RANGE: &str = "ближний бой";

/// A single attack a monster can make.
///
/// Immutable once created; the attack editor only ever adds or removes
/// whole attacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    pub hit_bonus: i32,
    pub damage_dice: u32,
    pub damage_die: u32,
    pub damage_bonus: i32,
    pub damage_type: String,
    pub range: String,
}

/// Raw text of the attack editor fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttackInput {
    pub name: String,
    pub hit_bonus: String,
    pub damage_dice: String,
    pub damage_die: String,
    pub damage_bonus: String,
    pub damage_type: String,
    pub range: String,
}

impl Attack {
    /// Build an attack from editor input.
    ///
    /// Only the name is required. Numbers that do not parse become `0`,
    /// negative dice counts clamp to `0`, and blank type/range fall back to
    /// [`DEFAULT_DAMAGE_TYPE`] and [`DEFAULT_RANGE`].
    pub fn from_input(input: &AttackInput) -> Result<Self, DomainError> {
        let name = none_if_blank(&input.name).ok_or(DomainError::MissingField("name"))?;

        Ok(Self {
            name: name.to_string(),
            hit_bonus: parse_int_or_zero(&input.hit_bonus),
            damage_dice: non_negative(parse_int_or_zero(&input.damage_dice)),
            damage_die: non_negative(parse_int_or_zero(&input.damage_die)),
            damage_bonus: parse_int_or_zero(&input.damage_bonus),
            damage_type: trimmed(&input.damage_type, DEFAULT_DAMAGE_TYPE),
            range: trimmed(&input.range, DEFAULT_RANGE),
        })
    }

    pub fn damage(&self) -> DamageRoll {
        DamageRoll::new(self.damage_dice, self.damage_die, self.damage_bonus)
    }

    /// One-line stat summary shown under the attack name
    pub fn summary(&self) -> String {
        format!(
            "{} попадание, {} урон ({}), {}",
            format_modifier(self.hit_bonus),
            self.damage(),
            self.damage_type,
            self.range
        )
    }
}

fn non_negative(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
