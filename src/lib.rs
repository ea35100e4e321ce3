#![deny(rust_2018_idioms)]

pub mod app;
pub mod domain;
pub mod form;
pub mod io;
mod presentation;
pub mod source;
pub mod validation;

pub use app::{FormController, FormPhase, PageFormUI, SubmitOutcome, UiOptions};
pub use domain::{ConfigError, DataType, EntityData, FieldConfig, FieldValue, PageConfig};
pub use source::{HttpPageSource, PageSource, SourceError, StaticPageSource};
pub use validation::ValidationEngine;

pub mod prelude {
    pub use super::app::{FormController, FormPhase, MenuItem, PageFormUI, SubmitOutcome, UiOptions};
    pub use super::domain::{EntityData, FieldValue, PageConfig, parse_page_config};
    pub use super::form::{FormState, SectionSpec};
    pub use super::source::{
        DEFAULT_BASE_URL, HttpPageSource, PageSource, SourceError, StaticPageSource,
    };
    pub use super::validation::ValidationEngine;
}

#[cfg(test)]
mod tests;
