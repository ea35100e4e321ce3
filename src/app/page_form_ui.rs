use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Builder;

use crate::{
    domain::EntityData,
    source::PageSource,
    validation::ValidationEngine,
};

use super::{controller::FormController, options::UiOptions, runtime::App};

/// Entry point for the terminal form UI.
///
/// ```no_run
/// use std::sync::Arc;
/// use pageform::prelude::*;
///
/// let source = HttpPageSource::new(DEFAULT_BASE_URL)?;
/// let saved = PageFormUI::new(Arc::new(source))
///     .with_page("orders")
///     .with_entity("1")
///     .run()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct PageFormUI {
    source: Arc<dyn PageSource>,
    engine: ValidationEngine,
    entity_id: String,
    page_id: Option<String>,
    title: Option<String>,
    options: UiOptions,
}

impl PageFormUI {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            engine: ValidationEngine::new(),
            entity_id: "1".to_string(),
            page_id: None,
            title: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_engine(mut self, engine: ValidationEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_entity(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = entity_id.into();
        self
    }

    /// Page opened on start. Defaults to the first menu entry.
    pub fn with_page(mut self, page_id: impl Into<String>) -> Self {
        self.page_id = Some(page_id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Blocks until the user quits and returns the last entity saved during
    /// the session.
    pub fn run(self) -> Result<Option<EntityData>> {
        let PageFormUI {
            source,
            engine,
            entity_id,
            page_id,
            title,
            options,
        } = self;

        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .context("failed to start async runtime")?;
        let controller =
            FormController::new(source, engine, entity_id).with_sections(options.sections.clone());
        let mut app = App::new(controller, options, runtime.handle().clone()).with_title(title);
        app.run(page_id)
    }
}
