pub mod components;
mod convert;
mod state;

pub use state::FieldState;
