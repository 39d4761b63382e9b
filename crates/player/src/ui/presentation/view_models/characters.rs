//! Characters screen: create form, inline editor, delete confirmation

use skirmish_domain::{CharacterDraft, CharacterId, CharacterInput};
use skirmish_protocol::CharacterData;

use crate::presentation::messages;

/// Row currently open in the inline editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterEdit {
    pub id: CharacterId,
    pub input: CharacterInput,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterForms {
    pub create: CharacterInput,
    pub editing: Option<CharacterEdit>,
    pub pending_delete: Option<CharacterId>,
}

impl CharacterForms {
    pub fn create_draft(&self) -> Result<CharacterDraft, &'static str> {
        CharacterDraft::from_input(&self.create).map_err(|err| {
            tracing::debug!(error = %err, "character rejected");
            messages::CHARACTER_FIELDS_REQUIRED
        })
    }

    pub fn clear_create(&mut self) {
        self.create = CharacterInput::default();
    }

    pub fn begin_edit(&mut self, character: &CharacterData) {
        self.editing = Some(CharacterEdit {
            id: character.id.into(),
            input: CharacterInput::from_values(
                &character.name,
                character.ac,
                character.base_initiative,
            ),
        });
    }

    pub fn is_editing(&self, id: CharacterId) -> bool {
        self.editing.as_ref().is_some_and(|edit| edit.id == id)
    }

    pub fn edit_draft(&self) -> Result<(CharacterId, CharacterDraft), &'static str> {
        let edit = self.editing.as_ref().ok_or(messages::CHARACTER_INVALID)?;
        let draft = CharacterDraft::from_input(&edit.input).map_err(|err| {
            tracing::debug!(error = %err, "character edit rejected");
            messages::CHARACTER_INVALID
        })?;
        Ok((edit.id, draft))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn request_delete(&mut self, id: CharacterId) {
        self.pending_delete = Some(id);
    }

    /// Hands out the id awaiting confirmation, clearing the prompt
    pub fn confirm_delete(&mut self) -> Option<CharacterId> {
        self.pending_delete.take()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}

pub fn character_meta(character: &CharacterData) -> String {
    format!("КД: {}, ИНИЦ: {}", character.ac, character.base_initiative)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranger() -> CharacterData {
        CharacterData {
            id: 5,
            campaign_id: Some(1),
            name: "Арвен".into(),
            ac: 15,
            base_initiative: 3,
        }
    }

    #[test]
    fn create_requires_all_fields() {
        let mut forms = CharacterForms::default();
        forms.create = CharacterInput {
            name: "Арвен".into(),
            ac: "15".into(),
            base_initiative: String::new(),
        };
        assert_eq!(forms.create_draft(), Err(messages::CHARACTER_FIELDS_REQUIRED));

        forms.create.base_initiative = "2".into();
        let draft = forms.create_draft().unwrap();
        assert_eq!(draft.ac, 15);
        assert_eq!(draft.base_initiative, 2);
    }

    #[test]
    fn edit_is_prefilled_and_validated() {
        let mut forms = CharacterForms::default();
        forms.begin_edit(&ranger());
        assert!(forms.is_editing(CharacterId::new(5)));
        assert_eq!(forms.editing.as_ref().unwrap().input.ac, "15");

        forms.editing.as_mut().unwrap().input.ac = "много".into();
        assert_eq!(forms.edit_draft(), Err(messages::CHARACTER_INVALID));

        forms.editing.as_mut().unwrap().input.ac = "16".into();
        let (id, draft) = forms.edit_draft().unwrap();
        assert_eq!(id, CharacterId::new(5));
        assert_eq!(draft.ac, 16);
    }

    #[test]
    fn delete_needs_confirmation_once() {
        let mut forms = CharacterForms::default();
        forms.request_delete(CharacterId::new(5));
        assert_eq!(forms.confirm_delete(), Some(CharacterId::new(5)));
        assert_eq!(forms.confirm_delete(), None);
    }

    #[test]
    fn meta_shows_ac_and_initiative() {
        assert_eq!(character_meta(&ranger()), "КД: 15, ИНИЦ: 3");
    }
}
