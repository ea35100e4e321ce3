use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::domain::{ENTITY_ID_KEY, EntityData, FieldValue, PageConfig, parse_page_config};

use super::{PageSource, SourceError};

/// In-memory pages and entities, seeded in code or from a fixture document
/// shaped as `{"pages": {id: config}, "data": {id: [entity, ..]}}`.
#[derive(Debug, Default)]
pub struct StaticPageSource {
    pages: IndexMap<String, PageConfig>,
    data: Mutex<IndexMap<String, Vec<EntityData>>>,
}

impl StaticPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(document: &Value) -> Result<Self, SourceError> {
        let mut source = Self::new();
        let pages = document
            .get("pages")
            .and_then(Value::as_object)
            .ok_or_else(|| SourceError::Unavailable("fixture has no 'pages' object".into()))?;
        for (page_id, config) in pages {
            source.pages.insert(page_id.clone(), parse_page_config(config)?);
        }
        if let Some(data) = document.get("data").and_then(Value::as_object) {
            for (page_id, entities) in data {
                let entities = match entities {
                    Value::Array(items) => items.iter().map(entity_from_json).collect(),
                    single => vec![entity_from_json(single)],
                };
                source.lock_data().insert(page_id.clone(), entities);
            }
        }
        Ok(source)
    }

    pub fn with_page(mut self, page_id: impl Into<String>, config: PageConfig) -> Self {
        self.pages.insert(page_id.into(), config);
        self
    }

    /// Adds an entity; `values` must carry its id under `id`.
    pub fn with_entity(self, page_id: impl Into<String>, values: EntityData) -> Self {
        self.lock_data().entry(page_id.into()).or_default().push(values);
        self
    }

    pub fn page_ids(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Stored values of one entity, id included.
    pub fn entity(&self, page_id: &str, entity_id: &str) -> Option<EntityData> {
        self.lock_data()
            .get(page_id)?
            .iter()
            .find(|entity| entity_matches(entity, entity_id))
            .cloned()
    }

    fn lock_data(&self) -> std::sync::MutexGuard<'_, IndexMap<String, Vec<EntityData>>> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PageSource for StaticPageSource {
    async fn load_page_config(&self, page_id: &str) -> Result<PageConfig, SourceError> {
        self.pages
            .get(page_id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(page_id.to_string()))
    }

    async fn load_page_data(
        &self,
        page_id: &str,
        entity_id: &str,
    ) -> Result<Option<EntityData>, SourceError> {
        Ok(self.entity(page_id, entity_id).map(|mut entity| {
            entity.shift_remove(ENTITY_ID_KEY);
            entity
        }))
    }

    async fn save_page_data(&self, page_id: &str, values: &EntityData) -> Result<(), SourceError> {
        let entity_id = values
            .get(ENTITY_ID_KEY)
            .map(FieldValue::as_text)
            .unwrap_or_default();
        let mut data = self.lock_data();
        let entities = data.entry(page_id.to_string()).or_default();
        match entities
            .iter_mut()
            .find(|entity| entity_matches(entity, &entity_id))
        {
            Some(existing) => *existing = values.clone(),
            None => entities.push(values.clone()),
        }
        debug!(page_id, entity_id = %entity_id, "entity stored");
        Ok(())
    }
}

fn entity_matches(entity: &EntityData, entity_id: &str) -> bool {
    entity
        .get(ENTITY_ID_KEY)
        .is_some_and(|id| id.as_text() == entity_id)
}

fn entity_from_json(value: &Value) -> EntityData {
    value
        .as_object()
        .map(|entity| {
            entity
                .iter()
                .map(|(key, value)| (key.clone(), FieldValue::from_json(value)))
                .collect()
        })
        .unwrap_or_default()
}
