//! Page lifecycle: loading a page, holding its form, and submitting it.
//!
//! The controller is a small state machine:
//!
//! ```text
//! Idle -> Loading -> Ready | Error
//! Ready -> Submitting -> Ready | Error
//! any -> Loading (navigation)
//! ```
//!
//! Every navigation bumps a generation counter. Tickets handed out by
//! [`FormController::begin_navigation`] and [`FormController::begin_submit`]
//! carry the page id and generation they were issued for, and completions
//! for anything but the current page and generation are dropped.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    domain::EntityData,
    form::{FormState, SectionSpec},
    source::{PageSnapshot, PageSource, SourceError, fetch_page},
    validation::ValidationEngine,
};

use super::validation::{ValidationOutcome, validate_form};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Loading,
    Ready,
    Submitting,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub page_id: String,
    pub entity_id: String,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct SaveTicket {
    pub page_id: String,
    pub payload: EntityData,
    generation: u64,
}

#[derive(Debug, Clone)]
pub enum SubmitGate {
    /// Some field is invalid; every field is now touched and nothing was sent.
    Blocked {
        issues: usize,
        global_errors: Vec<String>,
    },
    Save(SaveTicket),
    /// No form to submit, or a save is already in flight.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked { issues: usize },
    Saved,
    Failed(String),
    Unavailable,
    Stale,
}

pub struct FormController {
    source: Arc<dyn PageSource>,
    engine: ValidationEngine,
    entity_id: String,
    sections: Vec<SectionSpec>,
    phase: FormPhase,
    page_id: Option<String>,
    generation: u64,
    form: Option<FormState>,
    error: Option<String>,
    global_errors: Vec<String>,
    last_saved: Option<EntityData>,
}

impl FormController {
    pub fn new(
        source: Arc<dyn PageSource>,
        engine: ValidationEngine,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            source,
            engine,
            entity_id: entity_id.into(),
            sections: SectionSpec::defaults(),
            phase: FormPhase::Idle,
            page_id: None,
            generation: 0,
            form: None,
            error: None,
            global_errors: Vec::new(),
            last_saved: None,
        }
    }

    pub fn with_sections(mut self, sections: Vec<SectionSpec>) -> Self {
        self.sections = sections;
        self
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Problems with fields that no section renders, from the last submit.
    pub fn global_errors(&self) -> &[String] {
        &self.global_errors
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        self.form.as_mut()
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    pub fn source(&self) -> Arc<dyn PageSource> {
        Arc::clone(&self.source)
    }

    pub fn last_saved(&self) -> Option<&EntityData> {
        self.last_saved.as_ref()
    }

    pub fn take_last_saved(&mut self) -> Option<EntityData> {
        self.last_saved.take()
    }

    /// Starts loading `page_id`. The previous form is discarded and any
    /// response still in flight becomes stale.
    pub fn begin_navigation(&mut self, page_id: impl Into<String>) -> LoadTicket {
        let page_id = page_id.into();
        self.generation += 1;
        self.phase = FormPhase::Loading;
        self.form = None;
        self.error = None;
        self.global_errors.clear();
        self.page_id = Some(page_id.clone());
        info!(page_id = %page_id, generation = self.generation, "loading page");
        LoadTicket {
            page_id,
            entity_id: self.entity_id.clone(),
            generation: self.generation,
        }
    }

    /// Reloads the current page, typically after a failed fetch.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        let page_id = self.page_id.clone()?;
        Some(self.begin_navigation(page_id))
    }

    pub fn is_current(&self, page_id: &str, generation: u64) -> bool {
        self.generation == generation && self.page_id.as_deref() == Some(page_id)
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale and the
    /// result was dropped.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<PageSnapshot, SourceError>,
    ) -> bool {
        if !self.is_current(&ticket.page_id, ticket.generation) {
            debug!(page_id = %ticket.page_id, "discarding stale page response");
            return false;
        }
        match result {
            Ok(snapshot) => {
                let config = self.engine.bind(snapshot.config);
                let form = FormState::from_page(&config, snapshot.values.as_ref(), &self.sections);
                info!(
                    page_id = %ticket.page_id,
                    fields = form.len(),
                    seeded = snapshot.values.is_some(),
                    "page ready"
                );
                self.form = Some(form);
                self.phase = FormPhase::Ready;
            }
            Err(err) => {
                warn!(page_id = %ticket.page_id, error = %err, "page load failed");
                self.error = Some(err.to_string());
                self.phase = FormPhase::Error;
            }
        }
        true
    }

    /// Validates the form and, when every field passes, moves to `Submitting`
    /// and hands back the payload to save.
    ///
    /// Submitting is also allowed from `Error` while a form is present, so a
    /// failed save can be retried with the preserved values.
    pub fn begin_submit(&mut self) -> SubmitGate {
        if !matches!(self.phase, FormPhase::Ready | FormPhase::Error) {
            return SubmitGate::Unavailable;
        }
        let (Some(form), Some(page_id)) = (self.form.as_mut(), self.page_id.clone()) else {
            return SubmitGate::Unavailable;
        };
        match validate_form(form, &self.engine, &self.entity_id) {
            ValidationOutcome::Invalid {
                issues,
                global_errors,
                first_invalid,
            } => {
                debug!(page_id = %page_id, issues, "submit blocked by validation");
                if let Some(name) = first_invalid {
                    form.focus_field(&name);
                }
                self.global_errors = global_errors.clone();
                SubmitGate::Blocked {
                    issues,
                    global_errors,
                }
            }
            ValidationOutcome::Valid(payload) => {
                self.global_errors.clear();
                self.error = None;
                self.phase = FormPhase::Submitting;
                info!(page_id = %page_id, "submitting page");
                SubmitGate::Save(SaveTicket {
                    page_id,
                    payload,
                    generation: self.generation,
                })
            }
        }
    }

    /// Applies a save result. The form is kept either way. Returns `false`
    /// when the ticket is stale.
    pub fn complete_save(&mut self, ticket: SaveTicket, result: Result<(), SourceError>) -> bool {
        if !self.is_current(&ticket.page_id, ticket.generation) {
            debug!(page_id = %ticket.page_id, "discarding stale save response");
            return false;
        }
        match result {
            Ok(()) => {
                info!(page_id = %ticket.page_id, "page saved");
                self.last_saved = Some(ticket.payload);
                self.phase = FormPhase::Ready;
            }
            Err(err) => {
                warn!(page_id = %ticket.page_id, error = %err, "page save failed");
                self.error = Some(err.to_string());
                self.phase = FormPhase::Error;
            }
        }
        true
    }

    /// Clears every field to empty and untouched.
    pub fn reset(&mut self) -> bool {
        match self.form.as_mut() {
            Some(form) if self.phase != FormPhase::Submitting => {
                form.reset();
                self.global_errors.clear();
                true
            }
            _ => false,
        }
    }

    pub async fn navigate(&mut self, page_id: impl Into<String>) -> FormPhase {
        let ticket = self.begin_navigation(page_id);
        let result = fetch_page(self.source.as_ref(), &ticket.page_id, &ticket.entity_id).await;
        self.complete_load(ticket, result);
        self.phase
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let ticket = match self.begin_submit() {
            SubmitGate::Blocked { issues, .. } => return SubmitOutcome::Blocked { issues },
            SubmitGate::Unavailable => return SubmitOutcome::Unavailable,
            SubmitGate::Save(ticket) => ticket,
        };
        let result = self
            .source
            .save_page_data(&ticket.page_id, &ticket.payload)
            .await;
        let failure = result.as_ref().err().map(ToString::to_string);
        if !self.complete_save(ticket, result) {
            return SubmitOutcome::Stale;
        }
        match failure {
            Some(message) => SubmitOutcome::Failed(message),
            None => SubmitOutcome::Saved,
        }
    }
}
