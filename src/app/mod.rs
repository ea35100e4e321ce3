pub mod controller;
pub(crate) mod input;
pub(crate) mod keymap;
pub mod menu;
mod options;
mod page_form_ui;
mod runtime;
mod status;
mod terminal;
pub mod validation;

pub use controller::{FormController, FormPhase, LoadTicket, SaveTicket, SubmitGate, SubmitOutcome};
pub use menu::{MenuItem, MenuState, default_menu};
pub use options::UiOptions;
pub use page_form_ui::PageFormUI;
pub use validation::{ValidationOutcome, validate_form};
