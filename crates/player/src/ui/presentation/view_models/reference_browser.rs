//! Reference browser: tabs, debounced autocomplete and detail sections

use skirmish_domain::ReferenceId;
use skirmish_protocol::{CreatureData, ItemData, ReferenceKind, SpellData, SuggestionsData};

use super::debounce::Debouncer;
use crate::application::services::{ReferenceCatalog, ReferenceDetail};

/// Queries shorter than this (after trimming) never hit the backend
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceBrowser {
    pub tab: ReferenceKind,
    pub query: String,
    pub suggestions: Option<SuggestionsData>,
    debouncer: Debouncer,
}

impl ReferenceBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the catalogue tab; the reference view refetches when this changes
    pub fn select_tab(&mut self, kind: ReferenceKind) {
        self.tab = kind;
    }

    /// Record new search text.
    ///
    /// Returns the ticket and trimmed query to look up once the debounce
    /// delay has passed, or `None` when the query is too short. A short query
    /// also hides the dropdown and cancels any lookup still waiting.
    pub fn set_query(&mut self, raw: &str) -> Option<(u64, String)> {
        self.query = raw.to_string();
        let query = raw.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            self.debouncer.cancel();
            self.suggestions = None;
            return None;
        }
        Some((self.debouncer.ticket(), query.to_string()))
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.debouncer.is_current(ticket)
    }

    /// Store a lookup result unless a newer query superseded it.
    /// Empty results hide the dropdown.
    pub fn accept_suggestions(&mut self, ticket: u64, data: SuggestionsData) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.suggestions = (!data.is_empty()).then_some(data);
        true
    }

    pub fn hide_suggestions(&mut self) {
        self.suggestions = None;
    }
}

pub fn tab_label(kind: ReferenceKind) -> &'static str {
    match kind {
        ReferenceKind::Spells => "Заклинания",
        ReferenceKind::Items => "Предметы",
        ReferenceKind::Creatures => "Существа",
    }
}

pub fn kind_icon(kind: ReferenceKind) -> &'static str {
    match kind {
        ReferenceKind::Spells => "✨",
        ReferenceKind::Items => "🗡️",
        ReferenceKind::Creatures => "🐉",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub kind: ReferenceKind,
    pub id: ReferenceId,
    pub name: String,
    pub meta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionGroup {
    pub kind: ReferenceKind,
    pub items: Vec<SuggestionItem>,
}

/// Dropdown groups in tab order, skipping kinds without hits
pub fn suggestion_groups(data: &SuggestionsData) -> Vec<SuggestionGroup> {
    let spells = data.spells.iter().map(|s| SuggestionItem {
        kind: ReferenceKind::Spells,
        id: s.id.into(),
        name: s.name.clone(),
        meta: Some(format!("{} ур.", s.level)),
    });
    let items = data.items.iter().map(|i| SuggestionItem {
        kind: ReferenceKind::Items,
        id: i.id.into(),
        name: i.name.clone(),
        meta: i.category.clone(),
    });
    let creatures = data.creatures.iter().map(|c| SuggestionItem {
        kind: ReferenceKind::Creatures,
        id: c.id.into(),
        name: c.name.clone(),
        meta: c.cr.as_ref().map(|cr| format!("CR {cr}")),
    });

    [
        (ReferenceKind::Spells, spells.collect::<Vec<_>>()),
        (ReferenceKind::Items, items.collect()),
        (ReferenceKind::Creatures, creatures.collect()),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .map(|(kind, items)| SuggestionGroup { kind, items })
    .collect()
}

/// One catalogue card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub kind: ReferenceKind,
    pub id: ReferenceId,
    pub title: String,
    pub badges: Vec<String>,
    pub description: Option<String>,
}

pub fn catalog_cards(catalog: &ReferenceCatalog) -> Vec<CardView> {
    match catalog {
        ReferenceCatalog::Spells(list) => list.iter().map(spell_card).collect(),
        ReferenceCatalog::Items(list) => list.iter().map(item_card).collect(),
        ReferenceCatalog::Creatures(list) => list.iter().map(creature_card).collect(),
    }
}

fn spell_card(spell: &SpellData) -> CardView {
    let mut badges = vec![format!("{} уровень", spell.level)];
    badges.extend(spell.school.clone());
    if spell.concentration {
        badges.push("Концентрация".to_string());
    }
    CardView {
        kind: ReferenceKind::Spells,
        id: spell.id.into(),
        title: format!("✨ {}", spell.name),
        badges,
        description: spell.description.clone(),
    }
}

fn item_card(item: &ItemData) -> CardView {
    CardView {
        kind: ReferenceKind::Items,
        id: item.id.into(),
        title: format!("🗡️ {}", item.name),
        badges: item.category.iter().chain(&item.cost).cloned().collect(),
        description: item.description.clone(),
    }
}

fn creature_card(creature: &CreatureData) -> CardView {
    let mut badges: Vec<String> = creature.cr.iter().map(|cr| format!("CR {cr}")).collect();
    badges.extend(creature.creature_type.clone());
    CardView {
        kind: ReferenceKind::Creatures,
        id: creature.id.into(),
        title: format!("🐉 {}", creature.name),
        badges,
        description: creature.size.as_ref().map(|size| {
            format!("{}, {}", size, creature.alignment.as_deref().unwrap_or_default())
        }),
    }
}

/// Titled block of the detail modal; each line renders on its own row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl DetailSection {
    fn new(title: &'static str, line: impl Into<String>) -> Self {
        Self {
            title,
            lines: vec![line.into()],
        }
    }
}

pub fn detail_sections(detail: &ReferenceDetail) -> Vec<DetailSection> {
    let (mut sections, updated_at) = match detail {
        ReferenceDetail::Spell(spell) => (spell_sections(spell), spell.updated_at),
        ReferenceDetail::Item(item) => (item_sections(item), item.updated_at),
        ReferenceDetail::Creature(creature) => (creature_sections(creature), creature.updated_at),
    };
    if let Some(ts) = updated_at {
        sections.push(DetailSection::new("Обновлено", ts.format("%d.%m.%Y").to_string()));
    }
    sections
}

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn list(value: &Option<Vec<String>>) -> Option<String> {
    value
        .as_ref()
        .filter(|v| !v.is_empty())
        .map(|v| v.join(", "))
}

fn spell_sections(spell: &SpellData) -> Vec<DetailSection> {
    let level = match text(&spell.school) {
        Some(school) => format!("{} ({})", spell.level, school),
        None => spell.level.to_string(),
    };
    let mut sections = vec![DetailSection::new("Уровень", level)];

    let optional = [
        ("Время сотворения", text(&spell.casting_time).map(str::to_string)),
        ("Дистанция", text(&spell.range).map(str::to_string)),
        ("Компоненты", text(&spell.components).map(str::to_string)),
        ("Длительность", text(&spell.duration).map(str::to_string)),
        ("Классы", list(&spell.classes)),
        ("Подклассы", list(&spell.subclasses)),
        ("Описание", text(&spell.description).map(str::to_string)),
        (
            "На более высоких уровнях",
            text(&spell.at_higher_levels).map(str::to_string),
        ),
    ];
    sections.extend(
        optional
            .into_iter()
            .filter_map(|(title, value)| value.map(|v| DetailSection::new(title, v))),
    );
    sections
}

fn item_sections(item: &ItemData) -> Vec<DetailSection> {
    let mut sections = Vec::new();
    if let Some(category) = text(&item.category) {
        sections.push(DetailSection::new("Категория", category));
    }

    let stats: Vec<String> = [
        text(&item.cost).map(|c| format!("Стоимость: {c}")),
        text(&item.weight).map(|w| format!("Вес: {w}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !stats.is_empty() {
        sections.push(DetailSection {
            title: "Характеристики",
            lines: stats,
        });
    }

    if let Some(damage) = text(&item.damage) {
        sections.push(DetailSection::new("Урон", damage));
    }
    if let Some(description) = text(&item.description) {
        sections.push(DetailSection::new("Описание", description));
    }
    sections
}

fn score(value: Option<i32>) -> String {
    value.map_or_else(|| "—".to_string(), |v| v.to_string())
}

fn creature_sections(creature: &CreatureData) -> Vec<DetailSection> {
    let mut sections = Vec::new();

    let kind: Vec<&str> = [text(&creature.size), text(&creature.creature_type)]
        .into_iter()
        .flatten()
        .collect();
    if !kind.is_empty() {
        sections.push(DetailSection::new("Тип", kind.join(", ")));
    }
    if let Some(ac) = creature.ac.filter(|ac| *ac != 0) {
        sections.push(DetailSection::new("КД", ac.to_string()));
    }
    if let Some(hp) = text(&creature.hp) {
        sections.push(DetailSection::new("Хиты", hp));
    }
    if let Some(cr) = text(&creature.cr) {
        sections.push(DetailSection::new("Показатель опасности", format!("CR {cr}")));
    }
    if creature.strength.is_some() {
        sections.push(DetailSection {
            title: "Характеристики",
            lines: vec![
                format!(
                    "СИЛ: {}, ЛОВ: {}, ТЕЛ: {}",
                    score(creature.strength),
                    score(creature.dexterity),
                    score(creature.constitution)
                ),
                format!(
                    "ИНТ: {}, МДР: {}, ХАР: {}",
                    score(creature.intelligence),
                    score(creature.wisdom),
                    score(creature.charisma)
                ),
            ],
        });
    }
    sections
}
