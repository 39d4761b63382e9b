//! Attack accumulator for the next monster to be created

use crate::value_objects::Attack;

/// Attacks collected in the editor, waiting for a monster to claim them.
///
/// `HasAttacks` never holds an empty vector: removing the last attack moves
/// the list back to `Empty`. Committing hands the attacks over and resets the
/// list, yielding `None` rather than an empty vector when nothing was added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttackList {
    #[default]
    Empty,
    HasAttacks(Vec<Attack>),
}

impl AttackList {
    pub fn new() -> Self {
        Self::Empty
    }

    /// Append an attack, keeping insertion order
    pub fn add(&mut self, attack: Attack) {
        match self {
            Self::Empty => *self = Self::HasAttacks(vec![attack]),
            Self::HasAttacks(attacks) => attacks.push(attack),
        }
    }

    /// Remove the attack at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<Attack> {
        let Self::HasAttacks(attacks) = self else {
            return None;
        };
        if index >= attacks.len() {
            return None;
        }

        let removed = attacks.remove(index);
        if attacks.is_empty() {
            *self = Self::Empty;
        }
        Some(removed)
    }

    /// Take the accumulated attacks and reset to `Empty`
    pub fn commit(&mut self) -> Option<Vec<Attack>> {
        match std::mem::take(self) {
            Self::Empty => None,
            Self::HasAttacks(attacks) => Some(attacks),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub fn attacks(&self) -> &[Attack] {
        match self {
            Self::Empty => &[],
            Self::HasAttacks(attacks) => attacks,
        }
    }

    pub fn len(&self) -> usize {
        self.attacks().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{AttackInput, DEFAULT_DAMAGE_TYPE};

    fn attack(name: &str) -> Attack {
        Attack::from_input(&AttackInput {
            name: name.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn add_moves_to_has_attacks() {
        let mut list = AttackList::new();
        assert!(list.is_empty());

        list.add(attack("A"));
        assert!(!list.is_empty());
        assert_eq!(list.len(), 1);
        assert_eq!(list.attacks()[0].damage_type, DEFAULT_DAMAGE_TYPE);
    }

    #[test]
    fn remove_first_keeps_the_rest_in_order() {
        let mut list = AttackList::new();
        list.add(attack("A"));
        list.add(attack("B"));

        let removed = list.remove(0).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(list, AttackList::HasAttacks(vec![attack("B")]));
    }

    #[test]
    fn removing_last_attack_reverts_to_empty() {
        let mut list = AttackList::new();
        list.add(attack("A"));
        list.remove(0);
        assert_eq!(list, AttackList::Empty);
    }

    #[test]
    fn remove_out_of_range_is_ignored() {
        let mut list = AttackList::new();
        assert!(list.remove(0).is_none());

        list.add(attack("A"));
        assert!(list.remove(3).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn commit_of_empty_list_is_none() {
        let mut list = AttackList::new();
        assert_eq!(list.commit(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn commit_returns_attacks_and_resets() {
        let mut list = AttackList::new();
        list.add(attack("A"));
        list.add(attack("B"));

        let committed = list.commit().unwrap();
        let names: Vec<_> = committed.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(list.is_empty());
        assert_eq!(list.commit(), None);
    }
}
