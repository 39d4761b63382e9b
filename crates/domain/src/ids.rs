use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend ids are plain integers; the newtypes keep them from being mixed up.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(CampaignId);
define_id!(CharacterId);
define_id!(EncounterId);
define_id!(ParticipantId);

// Spells, items and creatures share one id space per table on the backend
define_id!(ReferenceId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_integers() {
        let id = CampaignId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: CampaignId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn display_is_the_raw_number() {
        assert_eq!(EncounterId::from(7).to_string(), "7");
    }
}
