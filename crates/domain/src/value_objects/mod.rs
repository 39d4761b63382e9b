//! Value objects

mod attack;
mod damage;

pub use attack::{Attack, AttackInput, DEFAULT_DAMAGE_TYPE, DEFAULT_RANGE};
pub use damage::{format_damage, format_modifier, DamageRoll};
