//! Skirmish Domain - value objects and drafts for the encounter client
//!
//! Everything here is pure and synchronous: no I/O, no rendering. The player
//! crate builds its view-models on top of these types so that state
//! transitions can be tested without a UI.

extern crate self as skirmish_domain;

pub mod common;
pub mod drafts;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use common::{parse_int, parse_int_or_zero};
pub use drafts::{
    AttackList, CharacterDraft, CharacterInput, EncounterPlayer, EncounterRoster,
    GroupMonsterDraft, MonsterInput, SetupPlayer, UniqueMonsterDraft,
};
pub use error::DomainError;
pub use ids::{CampaignId, CharacterId, EncounterId, ParticipantId, ReferenceId};
pub use value_objects::{
    format_damage, format_modifier, Attack, AttackInput, DamageRoll, DEFAULT_DAMAGE_TYPE,
    DEFAULT_RANGE,
};
