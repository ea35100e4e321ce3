use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, layout::Rect};
use tokio::{
    runtime::Handle,
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
};
use tracing::debug;

use crate::{
    domain::EntityData,
    form::{FormCommand, apply_command},
    presentation::{self, PageView, UiContext},
    source::{PageSnapshot, SourceError, fetch_page},
};

use super::{
    controller::{FormController, FormPhase, LoadTicket, SaveTicket, SubmitGate},
    input::{AppCommand, CommandDispatch, classify},
    keymap::{KeymapContext, help_text},
    menu::MenuState,
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

/// Completions of background requests, delivered to the UI thread.
pub(crate) enum AppEvent {
    Loaded(LoadTicket, Result<PageSnapshot, SourceError>),
    Saved(SaveTicket, Result<(), SourceError>),
}

pub(crate) struct App {
    controller: FormController,
    options: UiOptions,
    status: StatusLine,
    menu: MenuState,
    title: Option<String>,
    grid: bool,
    dirty: bool,
    exit_armed: bool,
    should_quit: bool,
    runtime: Handle,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(controller: FormController, options: UiOptions, runtime: Handle) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            menu: MenuState::new(options.menu.clone()),
            controller,
            options,
            status: StatusLine::new(),
            title: None,
            grid: false,
            dirty: false,
            exit_armed: false,
            should_quit: false,
            runtime,
            events_tx,
            events_rx,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Runs until the user quits. Returns the last entity saved during the
    /// session, if any.
    pub fn run(&mut self, initial_page: Option<String>) -> Result<Option<EntityData>> {
        let mut terminal = TerminalGuard::new(self.title.as_deref())?;
        let first = initial_page.or_else(|| self.menu.selected().map(|item| item.page_id.clone()));
        if let Some(page_id) = first {
            self.open_page(&page_id);
        }
        while !self.should_quit {
            self.drain_events();
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::Paste(text) => self.handle_paste(&text),
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost => {}
            }
        }
        Ok(self.controller.take_last_saved())
    }

    fn open_page(&mut self, page_id: &str) {
        self.menu.focus_page(page_id);
        let ticket = self.controller.begin_navigation(page_id);
        self.dirty = false;
        self.exit_armed = false;
        self.status.loading(self.menu.label_for(page_id));
        self.spawn_load(ticket);
    }

    fn spawn_load(&self, ticket: LoadTicket) {
        let source = self.controller.source();
        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = fetch_page(source.as_ref(), &ticket.page_id, &ticket.entity_id).await;
            let _ = events.send(AppEvent::Loaded(ticket, result));
        });
    }

    fn spawn_save(&self, ticket: SaveTicket) {
        let source = self.controller.source();
        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = source.save_page_data(&ticket.page_id, &ticket.payload).await;
            let _ = events.send(AppEvent::Saved(ticket, result));
        });
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Loaded(ticket, result) => {
                let page_id = ticket.page_id.clone();
                if !self.controller.complete_load(ticket, result) {
                    return;
                }
                if self.controller.phase() == FormPhase::Ready {
                    self.status.page_ready(self.menu.label_for(&page_id));
                } else {
                    self.status.load_failed();
                }
            }
            AppEvent::Saved(ticket, result) => {
                let failed = result.is_err();
                if !self.controller.complete_save(ticket, result) {
                    return;
                }
                if failed {
                    self.status.save_failed();
                } else {
                    self.dirty = false;
                    self.status.saved();
                }
            }
        }
    }

    fn is_busy(&self) -> bool {
        matches!(
            self.controller.phase(),
            FormPhase::Loading | FormPhase::Submitting
        )
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match classify(&key) {
            CommandDispatch::App(command) => self.handle_app_command(command),
            CommandDispatch::Form(command) => {
                self.exit_armed = false;
                if let Some(form) = self.controller.form_mut() {
                    apply_command(form, command);
                }
            }
            CommandDispatch::Input(event) => self.handle_field_input(&event),
            CommandDispatch::None => {}
        }
    }

    fn handle_field_input(&mut self, event: &KeyEvent) {
        if self.grid || self.controller.phase() == FormPhase::Submitting {
            return;
        }
        let Some(form) = self.controller.form_mut() else {
            return;
        };
        if let Some(name) = form.handle_key(event) {
            let label = form
                .field(&name)
                .map(|field| field.label().to_string())
                .unwrap_or_else(|| name.clone());
            apply_command(form, FormCommand::FieldEdited { name });
            self.dirty = true;
            self.exit_armed = false;
            self.status.editing(&label);
        }
    }

    /// Feeds pasted text to the focused field one character at a time, so
    /// each control keeps its own input rules.
    fn handle_paste(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| *ch != '\r') {
            let code = match ch {
                '\n' => KeyCode::Enter,
                other => KeyCode::Char(other),
            };
            self.handle_field_input(&KeyEvent::new(code, KeyModifiers::NONE));
        }
    }

    fn handle_app_command(&mut self, command: AppCommand) {
        if command != AppCommand::Quit {
            self.exit_armed = false;
        }
        match command {
            AppCommand::Submit => self.on_submit(),
            AppCommand::Quit => self.on_exit(),
            AppCommand::ResetStatus => self.status.ready(),
            AppCommand::ResetForm => {
                if self.controller.reset() {
                    self.dirty = true;
                    self.status.form_reset();
                } else {
                    self.status.busy();
                }
            }
            AppCommand::ToggleGrid => {
                if self.controller.form().is_some() {
                    self.grid = !self.grid;
                }
            }
            AppCommand::Retry => {
                if self.controller.phase() == FormPhase::Error && self.controller.form().is_none() {
                    if let Some(ticket) = self.controller.retry() {
                        let page_id = ticket.page_id.clone();
                        self.status.loading(self.menu.label_for(&page_id));
                        self.spawn_load(ticket);
                    }
                } else {
                    self.status.set_raw("Nothing to retry");
                }
            }
            AppCommand::PageStep(delta) => {
                let next = self.menu.step(delta).map(|item| item.page_id.clone());
                if let Some(page_id) = next {
                    debug!(page_id = %page_id, "menu navigation");
                    self.open_page(&page_id);
                }
            }
        }
    }

    fn on_submit(&mut self) {
        match self.controller.begin_submit() {
            SubmitGate::Blocked { issues, .. } => self.status.issues_remaining(issues),
            SubmitGate::Unavailable => self.status.busy(),
            SubmitGate::Save(ticket) => {
                self.status.submitting();
                self.spawn_save(ticket);
            }
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.dirty && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let context = if self.grid {
            KeymapContext::Grid
        } else {
            KeymapContext::Form
        };
        let help = self.options.show_help.then(|| help_text(context));
        let busy = self.is_busy();
        let phase = self.controller.phase();
        let error_message = self.controller.error().map(str::to_string);
        let global_errors = self.controller.global_errors().to_vec();
        let (error_count, focus_label) = match self.controller.form() {
            Some(form) => (
                form.errors().len(),
                form.focused_field().map(|field| field.label().to_string()),
            ),
            None => (0, None),
        };
        let page_id = self.controller.page_id().map(str::to_string);
        let page_label = page_id.as_deref().map(|id| self.menu.label_for(id));
        let page_error = if phase == FormPhase::Error && self.controller.form().is_some() {
            error_message.as_deref()
        } else {
            None
        };

        let page = match (phase, self.controller.form_mut()) {
            (_, Some(form)) => PageView::Form {
                form,
                grid: self.grid,
            },
            (FormPhase::Loading, None) => PageView::Loading {
                page: page_label.unwrap_or("page"),
            },
            (FormPhase::Error, None) => PageView::Failed {
                message: error_message.as_deref().unwrap_or("Unknown error"),
            },
            _ => PageView::Idle,
        };

        presentation::draw(
            frame,
            page,
            UiContext {
                title: self.title.as_deref(),
                menu: &self.menu,
                page_label,
                page_error,
                status_message: self.status.message(),
                help: help.as_deref(),
                focus_label: focus_label.as_deref(),
                global_errors: &global_errors,
                error_count,
                dirty: self.dirty,
                busy,
            },
        );
    }
}
