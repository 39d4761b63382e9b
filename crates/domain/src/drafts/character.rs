//! Campaign character form

use crate::common::{none_if_blank, parse_int};
use crate::error::DomainError;

/// Raw text of the character create/edit fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterInput {
    pub name: String,
    pub ac: String,
    pub base_initiative: String,
}

/// A validated character, ready to be created or updated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDraft {
    pub name: String,
    pub ac: i32,
    pub base_initiative: i32,
}

impl CharacterDraft {
    /// All three fields are required; numbers must start with an integer.
    pub fn from_input(input: &CharacterInput) -> Result<Self, DomainError> {
        let name = none_if_blank(&input.name).ok_or(DomainError::MissingField("name"))?;
        let ac = parse_int(&input.ac).ok_or(DomainError::NotANumber("ac"))?;
        let base_initiative =
            parse_int(&input.base_initiative).ok_or(DomainError::NotANumber("base_initiative"))?;

        Ok(Self {
            name: name.to_string(),
            ac,
            base_initiative,
        })
    }
}

impl CharacterInput {
    /// Pre-fill the edit form from stored values
    pub fn from_values(name: &str, ac: i32, base_initiative: i32) -> Self {
        Self {
            name: name.to_string(),
            ac: ac.to_string(),
            base_initiative: base_initiative.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_is_trimmed() {
        let draft = CharacterDraft::from_input(&CharacterInput {
            name: "  Арвен ".into(),
            ac: "15".into(),
            base_initiative: "-1".into(),
        })
        .unwrap();
        assert_eq!(draft.name, "Арвен");
        assert_eq!(draft.ac, 15);
        assert_eq!(draft.base_initiative, -1);
    }

    #[test]
    fn missing_number_is_rejected() {
        let err = CharacterDraft::from_input(&CharacterInput {
            name: "Борин".into(),
            ac: "".into(),
            base_initiative: "2".into(),
        })
        .unwrap_err();
        assert_eq!(err, DomainError::NotANumber("ac"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let input = CharacterInput::from_values("   ", 12, 1);
        assert_eq!(
            CharacterDraft::from_input(&input),
            Err(DomainError::MissingField("name"))
        );
    }
}
