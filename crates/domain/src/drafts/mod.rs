//! Client-side drafts
//!
//! Drafts live only until the encounter they belong to is submitted.

mod attack_list;
mod character;
mod monster;
mod roster;

pub use attack_list::AttackList;
pub use character::{CharacterDraft, CharacterInput};
pub use monster::{GroupMonsterDraft, MonsterInput, UniqueMonsterDraft};
pub use roster::{EncounterPlayer, EncounterRoster, SetupPlayer};
