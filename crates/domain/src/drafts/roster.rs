//! Encounter roster: players picked for the fight plus monster drafts

use serde::{Deserialize, Serialize};

use crate::common::parse_int;
use crate::ids::CharacterId;

use super::{GroupMonsterDraft, UniqueMonsterDraft};

/// A campaign character as shown on the setup screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPlayer {
    pub character_id: CharacterId,
    pub name: String,
    pub ac: i32,
    pub base_initiative: i32,
    /// Whether the character takes part in this encounter
    pub include: bool,
    /// Initiative for this encounter, editable per fight
    pub initiative_total: i32,
}

impl SetupPlayer {
    /// Not included by default; initiative starts at the character's base value
    pub fn new(
        character_id: CharacterId,
        name: impl Into<String>,
        ac: i32,
        base_initiative: i32,
    ) -> Self {
        Self {
            character_id,
            name: name.into(),
            ac,
            base_initiative,
            include: false,
            initiative_total: base_initiative,
        }
    }
}

/// A player entry as submitted to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterPlayer {
    pub character_id: CharacterId,
    pub initiative_total: i32,
}

/// Everything assembled for one encounter before it is submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncounterRoster {
    players: Vec<SetupPlayer>,
    unique_monsters: Vec<UniqueMonsterDraft>,
    group_monsters: Vec<GroupMonsterDraft>,
}

impl EncounterRoster {
    /// Start a fresh roster from the campaign's characters
    pub fn new(players: Vec<SetupPlayer>) -> Self {
        Self {
            players,
            unique_monsters: Vec::new(),
            group_monsters: Vec::new(),
        }
    }

    pub fn players(&self) -> &[SetupPlayer] {
        &self.players
    }

    pub fn unique_monsters(&self) -> &[UniqueMonsterDraft] {
        &self.unique_monsters
    }

    pub fn group_monsters(&self) -> &[GroupMonsterDraft] {
        &self.group_monsters
    }

    /// Flip whether the player at `index` is in the fight
    pub fn toggle_player(&mut self, index: usize) {
        if let Some(player) = self.players.get_mut(index) {
            player.include = !player.include;
        }
    }

    /// Set the encounter initiative from raw input.
    ///
    /// Returns `false` (and keeps the old value) when `raw` is not a number.
    pub fn set_initiative(&mut self, index: usize, raw: &str) -> bool {
        match (self.players.get_mut(index), parse_int(raw)) {
            (Some(player), Some(value)) => {
                player.initiative_total = value;
                true
            }
            _ => false,
        }
    }

    pub fn add_unique(&mut self, draft: UniqueMonsterDraft) {
        self.unique_monsters.push(draft);
    }

    pub fn add_group(&mut self, draft: GroupMonsterDraft) {
        self.group_monsters.push(draft);
    }

    pub fn remove_unique(&mut self, index: usize) -> Option<UniqueMonsterDraft> {
        (index < self.unique_monsters.len()).then(|| self.unique_monsters.remove(index))
    }

    pub fn remove_group(&mut self, index: usize) -> Option<GroupMonsterDraft> {
        (index < self.group_monsters.len()).then(|| self.group_monsters.remove(index))
    }

    /// Included players with their edited initiative, in display order
    pub fn selected_players(&self) -> Vec<EncounterPlayer> {
        self.players
            .iter()
            .filter(|p| p.include)
            .map(|p| EncounterPlayer {
                character_id: p.character_id,
                initiative_total: p.initiative_total,
            })
            .collect()
    }

    pub fn has_selected_players(&self) -> bool {
        self.players.iter().any(|p| p.include)
    }
}
