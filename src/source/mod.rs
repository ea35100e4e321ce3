//! Data collaborators: where page configurations and entity values come from
//! and where saved values go.

mod http;
mod memory;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::domain::{ConfigError, EntityData, PageConfig};

pub use http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpPageSource};
pub use memory::StaticPageSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Error Code: {code}\nMessage: {message}")]
    Status { code: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("page '{0}' was not found")]
    NotFound(String),
    #[error("{0}")]
    Unavailable(String),
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SourceError::NotFound(_) | SourceError::Status { code: 404, .. }
        )
    }
}

#[async_trait]
pub trait PageSource: Send + Sync {
    async fn load_page_config(&self, page_id: &str) -> Result<PageConfig, SourceError>;

    /// Values of one entity, or `None` when the page holds no such entity.
    async fn load_page_data(
        &self,
        page_id: &str,
        entity_id: &str,
    ) -> Result<Option<EntityData>, SourceError>;

    /// Persists `values`; the entity id travels inside them under `id`.
    async fn save_page_data(&self, page_id: &str, values: &EntityData) -> Result<(), SourceError>;
}

/// Configuration and entity values of one page, fetched together.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub config: PageConfig,
    pub values: Option<EntityData>,
}

/// Issues both page requests concurrently. The first failure wins and the
/// other request is dropped.
pub async fn fetch_page(
    source: &dyn PageSource,
    page_id: &str,
    entity_id: &str,
) -> Result<PageSnapshot, SourceError> {
    debug!(page_id, entity_id, "fetching page");
    let (config, values) = futures::try_join!(
        source.load_page_config(page_id),
        source.load_page_data(page_id, entity_id)
    )?;
    Ok(PageSnapshot { config, values })
}
