#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Press Ctrl+S to save.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn loading(&mut self, page: &str) {
        self.message = format!("Loading {page}…");
    }

    pub fn page_ready(&mut self, page: &str) {
        self.message = format!("{page} loaded. Press Ctrl+S to save.");
    }

    pub fn load_failed(&mut self) {
        self.message = "Could not load the page. Press F5 to retry.".to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn submitting(&mut self) {
        self.message = "Saving…".to_string();
    }

    pub fn saved(&mut self) {
        self.message = "Saved.".to_string();
    }

    pub fn save_failed(&mut self) {
        self.message = "Save failed. Your changes are kept; press Ctrl+S to retry.".to_string();
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} issue(s) remaining");
    }

    pub fn form_reset(&mut self) {
        self.message = "Form cleared".to_string();
    }

    pub fn busy(&mut self) {
        self.message = "Nothing to save right now".to_string();
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsaved changes. Press Ctrl+Q again to quit without saving.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
