//! Skirmish Protocol - wire types for the encounter backend
//!
//! This crate contains the JSON shapes exchanged with the backend REST API:
//! - Campaign and character CRUD payloads
//! - Encounter creation, participants, and tracker state
//! - Reference (spells/items/creatures) search and detail records
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and chrono
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets
//! 4. **No domain types** - ids are raw `i64`; conversions live in the player

pub mod campaigns;
pub mod characters;
pub mod encounters;
pub mod reference;
pub mod responses;

pub use campaigns::{CampaignData, CampaignInviteData, CreateCampaignData};
pub use characters::{CharacterData, CreateCharacterData, UpdateCharacterData};
pub use encounters::{
    AttackData, CreateEncounterData, EncounterData, EncounterListItemData,
    EncounterParticipantsData, EncounterStateData, EncounterStatus, GroupMonsterData,
    HpChangeData, ParticipantData, ParticipantType, PlayerInEncounterData, StartEncounterData,
    UniqueMonsterData,
};
pub use reference::{
    CreatureData, CreatureSuggestionData, ItemData, ItemSuggestionData, ReferenceKind, SpellData,
    SpellSuggestionData, SuggestionsData,
};
pub use responses::{HpChangeResponse, StatusResponse};
