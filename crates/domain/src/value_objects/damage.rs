//! Damage notation like "2d6+3".
//!
//! Unlike a rollable formula, a damage roll may have no dice at all: flat
//! damage ("5") and "no damage" ("0") are both valid and only affect how the
//! value is displayed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage dealt by an attack, as entered in the attack editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Number of dice (X in XdY)
    pub dice: u32,
    /// Size of each die (Y in XdY)
    pub die: u32,
    /// Flat bonus added after rolling
    pub bonus: i32,
}

impl DamageRoll {
    pub const fn new(dice: u32, die: u32, bonus: i32) -> Self {
        Self { dice, die, bonus }
    }

    /// True when both a dice count and a die size are present
    pub const fn has_dice(&self) -> bool {
        self.dice > 0 && self.die > 0
    }
}

impl fmt::Display for DamageRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_dice() {
            write!(f, "{}d{}", self.dice, self.die)?;
            if self.bonus > 0 {
                write!(f, "+{}", self.bonus)?;
            } else if self.bonus < 0 {
                write!(f, "{}", self.bonus)?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.bonus)
        }
    }
}

/// Format damage as canonical notation.
///
/// Total over all inputs: dice without a die size (or the reverse) fall back
/// to the bonus alone, and no damage at all renders as `"0"`.
///
/// # Examples
///
/// ```
/// use skirmish_domain::format_damage;
///
/// assert_eq!(format_damage(2, 6, 3), "2d6+3");
/// assert_eq!(format_damage(1, 8, -1), "1d8-1");
/// assert_eq!(format_damage(0, 0, 4), "4");
/// ```
pub fn format_damage(dice: u32, die: u32, bonus: i32) -> String {
    DamageRoll::new(dice, die, bonus).to_string()
}

/// Format a modifier with an explicit sign ("+3", "-1", "+0").
pub fn format_modifier(value: i32) -> String {
    if value < 0 {
        value.to_string()
    } else {
        format!("+{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_with_positive_bonus() {
        assert_eq!(format_damage(2, 6, 3), "2d6+3");
    }

    #[test]
    fn test_dice_without_bonus() {
        assert_eq!(format_damage(2, 6, 0), "2d6");
    }

    #[test]
    fn test_dice_with_negative_bonus() {
        assert_eq!(format_damage(2, 6, -1), "2d6-1");
    }

    #[test]
    fn test_flat_bonus_only() {
        assert_eq!(format_damage(0, 0, 5), "5");
        assert_eq!(format_damage(0, 0, -2), "-2");
    }

    #[test]
    fn test_no_damage_is_zero() {
        assert_eq!(format_damage(0, 0, 0), "0");
    }

    #[test]
    fn test_missing_die_size_falls_back_to_bonus() {
        assert_eq!(format_damage(0, 6, 3), "3");
        assert_eq!(format_damage(2, 0, 3), "3");
        assert_eq!(format_damage(2, 0, 0), "0");
    }

    #[test]
    fn test_display_matches_format_damage() {
        let roll = DamageRoll::new(1, 12, 4);
        assert_eq!(roll.to_string(), format_damage(1, 12, 4));
        assert!(roll.has_dice());
        assert!(!DamageRoll::default().has_dice());
    }

    #[test]
    fn test_format_modifier() {
        assert_eq!(format_modifier(3), "+3");
        assert_eq!(format_modifier(0), "+0");
        assert_eq!(format_modifier(-1), "-1");
    }
}
