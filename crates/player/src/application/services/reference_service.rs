//! Reference Service - spell/item/creature catalogue

use skirmish_domain::ReferenceId;
use skirmish_protocol::{CreatureData, ItemData, ReferenceKind, SpellData, SuggestionsData};

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

/// Cards shown per catalogue tab
pub const SEARCH_LIMIT: u32 = 20;

/// Suggestions per kind in the autocomplete dropdown
pub const SUGGESTION_LIMIT: u32 = 5;

/// One tab's worth of catalogue entries
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceCatalog {
    Spells(Vec<SpellData>),
    Items(Vec<ItemData>),
    Creatures(Vec<CreatureData>),
}

impl ReferenceCatalog {
    pub fn kind(&self) -> ReferenceKind {
        match self {
            Self::Spells(_) => ReferenceKind::Spells,
            Self::Items(_) => ReferenceKind::Items,
            Self::Creatures(_) => ReferenceKind::Creatures,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Spells(list) => list.len(),
            Self::Items(list) => list.len(),
            Self::Creatures(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single catalogue entry opened in the detail modal
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceDetail {
    Spell(SpellData),
    Item(ItemData),
    Creature(CreatureData),
}

impl ReferenceDetail {
    pub fn name(&self) -> &str {
        match self {
            Self::Spell(spell) => &spell.name,
            Self::Item(item) => &item.name,
            Self::Creature(creature) => &creature.name,
        }
    }
}

#[derive(Clone)]
pub struct ReferenceService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> ReferenceService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Autocomplete across all three kinds. `query` is sent URL-encoded.
    pub async fn suggestions(&self, query: &str) -> Result<SuggestionsData, ServiceError> {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        let path = format!(
            "/reference/search/suggestions?q={}&limit={}",
            encoded, SUGGESTION_LIMIT
        );
        Ok(self.api.get(&path).await?)
    }

    /// First page of a catalogue tab
    pub async fn search(&self, kind: ReferenceKind) -> Result<ReferenceCatalog, ServiceError> {
        let path = format!(
            "/reference/{}/search?limit={}",
            kind.path_segment(),
            SEARCH_LIMIT
        );
        let catalog = match kind {
            ReferenceKind::Spells => ReferenceCatalog::Spells(self.api.get(&path).await?),
            ReferenceKind::Items => ReferenceCatalog::Items(self.api.get(&path).await?),
            ReferenceKind::Creatures => ReferenceCatalog::Creatures(self.api.get(&path).await?),
        };
        Ok(catalog)
    }

    pub async fn detail(
        &self,
        kind: ReferenceKind,
        id: ReferenceId,
    ) -> Result<ReferenceDetail, ServiceError> {
        let path = format!("/reference/{}/{}", kind.path_segment(), id);
        let detail = match kind {
            ReferenceKind::Spells => ReferenceDetail::Spell(self.api.get(&path).await?),
            ReferenceKind::Items => ReferenceDetail::Item(self.api.get(&path).await?),
            ReferenceKind::Creatures => ReferenceDetail::Creature(self.api.get(&path).await?),
        };
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::MockRawApiPort;
    use mockall::predicate::eq;
    use serde_json::json;
    use std::sync::Arc;

    fn service(raw: MockRawApiPort) -> ReferenceService<Api> {
        ReferenceService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn suggestions_encode_query() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .with(eq(
                "/reference/search/suggestions?q=%D0%BE%D0%B3%D0%BE%D0%BD%D1%8C+%26+%D0%BB%D1%91%D0%B4&limit=5",
            ))
            .times(1)
            .returning(|_| Ok(json!({"spells": [], "items": [], "creatures": []})));

        let data = service(raw).suggestions("огонь & лёд").await.unwrap();
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn search_uses_tab_segment_and_limit() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .with(eq("/reference/items/search?limit=20"))
            .times(1)
            .returning(|_| Ok(json!([{"id": 3, "name": "Длинный меч", "category": "Оружие"}])));

        let catalog = service(raw).search(ReferenceKind::Items).await.unwrap();
        assert_eq!(catalog.kind(), ReferenceKind::Items);
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn detail_reads_kind_and_id() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .with(eq("/reference/creatures/12"))
            .times(1)
            .returning(|_| Ok(json!({"id": 12, "name": "Гоблин", "cr": "1/4"})));

        let detail = service(raw)
            .detail(ReferenceKind::Creatures, ReferenceId::new(12))
            .await
            .unwrap();
        assert_eq!(detail.name(), "Гоблин");
        assert!(matches!(detail, ReferenceDetail::Creature(_)));
    }
}
