//! Encounter setup: player selection, monster drafts and the start request

use skirmish_domain::{
    CampaignId, EncounterRoster, GroupMonsterDraft, MonsterInput, SetupPlayer,
    UniqueMonsterDraft,
};
use skirmish_protocol::CharacterData;

use super::attack_editor::{AttackEditor, AttackTarget};
use super::CurrentCampaign;
use crate::presentation::messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterSetup {
    pub campaign: Option<CurrentCampaign>,
    pub roster: EncounterRoster,
    pub unique_input: MonsterInput,
    pub group_input: MonsterInput,
    pub group_count: String,
    pub unique_attacks: AttackEditor,
    pub group_attacks: AttackEditor,
    pub encounter_name: String,
}

/// What the start button submits once validation passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    pub campaign_id: CampaignId,
    pub name: String,
    pub roster: EncounterRoster,
}

impl Default for EncounterSetup {
    fn default() -> Self {
        Self::new(None)
    }
}

impl EncounterSetup {
    pub fn new(campaign: Option<CurrentCampaign>) -> Self {
        Self {
            campaign,
            roster: EncounterRoster::default(),
            unique_input: MonsterInput::default(),
            group_input: MonsterInput::default(),
            group_count: String::new(),
            unique_attacks: AttackEditor::new(AttackTarget::Unique),
            group_attacks: AttackEditor::new(AttackTarget::Group),
            encounter_name: messages::ENCOUNTER_NAME_PLACEHOLDER.to_string(),
        }
    }

    /// Replace the roster with freshly loaded characters and drop every draft
    pub fn load_players(&mut self, characters: &[CharacterData]) {
        let players = characters
            .iter()
            .map(|c| SetupPlayer::new(c.id.into(), c.name.clone(), c.ac, c.base_initiative))
            .collect();
        self.roster = EncounterRoster::new(players);
        self.unique_attacks.reset();
        self.group_attacks.reset();
    }

    pub fn editor(&self, target: AttackTarget) -> &AttackEditor {
        match target {
            AttackTarget::Unique => &self.unique_attacks,
            AttackTarget::Group => &self.group_attacks,
        }
    }

    pub fn editor_mut(&mut self, target: AttackTarget) -> &mut AttackEditor {
        match target {
            AttackTarget::Unique => &mut self.unique_attacks,
            AttackTarget::Group => &mut self.group_attacks,
        }
    }

    pub fn toggle_player(&mut self, index: usize) {
        self.roster.toggle_player(index);
    }

    pub fn set_initiative(&mut self, index: usize, raw: &str) {
        self.roster.set_initiative(index, raw);
    }

    pub fn add_unique(&mut self) -> Result<String, &'static str> {
        let draft =
            UniqueMonsterDraft::from_input(&self.unique_input, self.unique_attacks.list_mut())
                .map_err(|err| {
                    tracing::debug!(error = %err, "unique monster rejected");
                    messages::UNIQUE_FIELDS_REQUIRED
                })?;

        let toast = messages::unique_added(&draft.name, draft.attack_count());
        self.roster.add_unique(draft);
        self.unique_input = MonsterInput::default();
        Ok(toast)
    }

    pub fn add_group(&mut self) -> Result<String, &'static str> {
        let draft = GroupMonsterDraft::from_input(
            &self.group_input,
            &self.group_count,
            self.group_attacks.list_mut(),
        )
        .map_err(|err| {
            tracing::debug!(error = %err, "group rejected");
            messages::GROUP_FIELDS_REQUIRED
        })?;

        let toast = messages::group_added(&draft.name, draft.count, draft.attack_count());
        self.roster.add_group(draft);
        self.group_input = MonsterInput::default();
        self.group_count.clear();
        Ok(toast)
    }

    pub fn remove_unique(&mut self, index: usize) {
        self.roster.remove_unique(index);
    }

    pub fn remove_group(&mut self, index: usize) {
        self.roster.remove_group(index);
    }

    /// Validate the form and snapshot what will be submitted
    pub fn start_request(&self) -> Result<StartRequest, &'static str> {
        let campaign = self.campaign.as_ref().ok_or(messages::NO_CAMPAIGN_SELECTED)?;
        if !self.roster.has_selected_players() {
            return Err(messages::NO_PLAYERS_SELECTED);
        }
        Ok(StartRequest {
            campaign_id: campaign.id,
            name: self.encounter_name.clone(),
            roster: self.roster.clone(),
        })
    }

    pub fn subtitle(&self) -> String {
        match &self.campaign {
            Some(campaign) => format!("Кампания: {}", campaign.name),
            None => String::new(),
        }
    }
}

pub fn player_meta(player: &SetupPlayer) -> String {
    format!("КД: {}, баз. ИНИЦ: {}", player.ac, player.base_initiative)
}

pub fn player_pill(player: &SetupPlayer) -> &'static str {
    if player.include {
        "В бою"
    } else {
        "Не в бою"
    }
}

fn monster_meta(max_hp: i32, ac: i32, initiative_mod: i32, attacks: usize) -> String {
    let mut meta = format!("ХП: {max_hp}, КД: {ac}, ИНИЦ+: {initiative_mod}");
    if attacks > 0 {
        meta.push_str(&format!(" • ⚔️ {attacks} атак"));
    }
    meta
}

pub fn unique_meta(draft: &UniqueMonsterDraft) -> String {
    monster_meta(draft.max_hp, draft.ac, draft.initiative_mod, draft.attack_count())
}

pub fn group_title(draft: &GroupMonsterDraft) -> String {
    format!("{} (x{})", draft.name, draft.count)
}

pub fn group_meta(draft: &GroupMonsterDraft) -> String {
    monster_meta(draft.max_hp, draft.ac, draft.initiative_mod, draft.attack_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_domain::AttackInput;

    fn characters() -> Vec<CharacterData> {
        vec![
            CharacterData {
                id: 1,
                campaign_id: Some(7),
                name: "Арвен".into(),
                ac: 15,
                base_initiative: 3,
            },
            CharacterData {
                id: 2,
                campaign_id: Some(7),
                name: "Борин".into(),
                ac: 18,
                base_initiative: 0,
            },
        ]
    }

    fn setup() -> EncounterSetup {
        let mut setup = EncounterSetup::new(Some(CurrentCampaign {
            id: CampaignId::new(7),
            name: "Туманы".into(),
        }));
        setup.load_players(&characters());
        setup
    }

    fn ogre() -> MonsterInput {
        MonsterInput {
            name: "Огр".into(),
            max_hp: "59".into(),
            ac: "11".into(),
            initiative_mod: "-1".into(),
        }
    }

    #[test]
    fn new_setup_prefills_encounter_name() {
        assert_eq!(EncounterSetup::default().encounter_name, "Засада у моста");
    }

    #[test]
    fn add_unique_commits_pending_attacks_and_clears_form() {
        let mut setup = setup();
        setup.unique_attacks.input = AttackInput {
            name: "Дубина".into(),
            ..Default::default()
        };
        setup.unique_attacks.add().unwrap();
        setup.unique_input = ogre();

        let toast = setup.add_unique().unwrap();

        assert_eq!(toast, "Моб 'Огр' добавлен с 1 атаками ⚔️");
        assert_eq!(setup.unique_input, MonsterInput::default());
        assert!(setup.unique_attacks.attacks().is_empty());
        assert_eq!(
            unique_meta(&setup.roster.unique_monsters()[0]),
            "ХП: 59, КД: 11, ИНИЦ+: -1 • ⚔️ 1 атак"
        );
    }

    #[test]
    fn add_unique_without_attacks_has_no_attack_list() {
        let mut setup = setup();
        setup.unique_input = ogre();
        setup.add_unique().unwrap();

        assert_eq!(setup.roster.unique_monsters()[0].attacks, None);
    }

    #[test]
    fn invalid_group_keeps_pending_attacks() {
        let mut setup = setup();
        setup.group_attacks.input = AttackInput {
            name: "Копьё".into(),
            ..Default::default()
        };
        setup.group_attacks.add().unwrap();
        setup.group_input = ogre();
        setup.group_count = "x".into();

        assert_eq!(setup.add_group(), Err(messages::GROUP_FIELDS_REQUIRED));
        assert_eq!(setup.group_attacks.attacks().len(), 1);
        assert!(setup.roster.group_monsters().is_empty());
    }

    #[test]
    fn add_group_reports_count() {
        let mut setup = setup();
        setup.group_input = MonsterInput {
            name: "Гоблин".into(),
            max_hp: "7".into(),
            ac: "15".into(),
            initiative_mod: "2".into(),
        };
        setup.group_count = "4".into();

        assert_eq!(setup.add_group().unwrap(), "Группа 'Гоблин' (x4) добавлена");
        assert_eq!(group_title(&setup.roster.group_monsters()[0]), "Гоблин (x4)");
        assert!(setup.group_count.is_empty());
    }

    #[test]
    fn start_requires_campaign_then_players() {
        let mut orphan = EncounterSetup::new(None);
        orphan.load_players(&characters());
        assert_eq!(orphan.start_request(), Err(messages::NO_CAMPAIGN_SELECTED));

        let mut setup = setup();
        assert_eq!(setup.start_request(), Err(messages::NO_PLAYERS_SELECTED));

        setup.toggle_player(1);
        setup.set_initiative(1, "17");
        let request = setup.start_request().unwrap();
        assert_eq!(request.campaign_id, CampaignId::new(7));
        let selected = request.roster.selected_players();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].initiative_total, 17);
    }

    #[test]
    fn reloading_players_drops_pending_attacks() {
        let mut setup = setup();
        setup.unique_attacks.input.name = "Рык".into();
        setup.unique_attacks.add().unwrap();

        setup.load_players(&characters());

        assert!(setup.unique_attacks.attacks().is_empty());
        assert!(player_pill(&setup.roster.players()[0]).starts_with("Не"));
        assert_eq!(player_meta(&setup.roster.players()[0]), "КД: 15, баз. ИНИЦ: 3");
    }
}
