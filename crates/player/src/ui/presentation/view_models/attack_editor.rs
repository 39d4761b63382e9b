//! Attack editor shared by the unique-monster and group forms

use skirmish_domain::{Attack, AttackInput, AttackList};

use crate::presentation::messages;

/// Which monster form the pending attacks will be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackTarget {
    Unique,
    Group,
}

impl AttackTarget {
    fn recipient(self) -> &'static str {
        match self {
            Self::Unique => "следующему мобу",
            Self::Group => "следующей группе",
        }
    }
}

/// Editor form fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackField {
    Name,
    HitBonus,
    DamageDice,
    DamageDie,
    DamageBonus,
    DamageType,
    Range,
}

impl AttackField {
    pub const ALL: [AttackField; 7] = [
        Self::Name,
        Self::HitBonus,
        Self::DamageDice,
        Self::DamageDie,
        Self::DamageBonus,
        Self::DamageType,
        Self::Range,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Название",
            Self::HitBonus => "Попадание +",
            Self::DamageDice => "Кубов",
            Self::DamageDie => "Грань (d)",
            Self::DamageBonus => "Бонус урона",
            Self::DamageType => "Тип урона",
            Self::Range => "Дальность",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Name | Self::DamageType | Self::Range)
    }

    pub fn get(self, input: &AttackInput) -> &str {
        match self {
            Self::Name => &input.name,
            Self::HitBonus => &input.hit_bonus,
            Self::DamageDice => &input.damage_dice,
            Self::DamageDie => &input.damage_die,
            Self::DamageBonus => &input.damage_bonus,
            Self::DamageType => &input.damage_type,
            Self::Range => &input.range,
        }
    }

    pub fn set(self, input: &mut AttackInput, value: String) {
        let slot = match self {
            Self::Name => &mut input.name,
            Self::HitBonus => &mut input.hit_bonus,
            Self::DamageDice => &mut input.damage_dice,
            Self::DamageDie => &mut input.damage_die,
            Self::DamageBonus => &mut input.damage_bonus,
            Self::DamageType => &mut input.damage_type,
            Self::Range => &mut input.range,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackEditor {
    pub target: AttackTarget,
    pub input: AttackInput,
    pub open: bool,
    attacks: AttackList,
}

impl AttackEditor {
    pub fn new(target: AttackTarget) -> Self {
        Self {
            target,
            input: AttackInput::default(),
            open: false,
            attacks: AttackList::new(),
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Parse the form into an attack. On success the fields are cleared.
    pub fn add(&mut self) -> Result<(), &'static str> {
        let attack = Attack::from_input(&self.input).map_err(|err| {
            tracing::debug!(error = %err, "attack rejected");
            messages::ATTACK_NAME_REQUIRED
        })?;
        self.attacks.add(attack);
        self.input = AttackInput::default();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) {
        self.attacks.remove(index);
    }

    pub fn attacks(&self) -> &[Attack] {
        self.attacks.attacks()
    }

    /// Accumulator handed to the monster draft, which commits it
    pub fn list_mut(&mut self) -> &mut AttackList {
        &mut self.attacks
    }

    pub fn reset(&mut self) {
        self.attacks.clear();
        self.input = AttackInput::default();
    }

    pub fn button_label(&self) -> String {
        format!("⚔️ Атаки ({})", self.attacks.len())
    }

    /// Hint under the monster form while attacks are waiting to be attached
    pub fn pending_hint(&self) -> Option<String> {
        if self.attacks.is_empty() {
            return None;
        }
        Some(format!(
            "⚠️ {} атак будут добавлены {}",
            self.attacks.len(),
            self.target.recipient()
        ))
    }

    pub fn rows(&self) -> Vec<(String, String)> {
        self.attacks
            .attacks()
            .iter()
            .map(|attack| (attack.name.clone(), attack.summary()))
            .collect()
    }
}
