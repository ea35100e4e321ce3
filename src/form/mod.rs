mod actions;
pub(crate) mod field;
mod reducers;
pub mod section;
mod state;

pub use actions::FormCommand;
pub use field::FieldState;
pub use field::components::{ComponentKind, SelectStateRef};
pub use reducers::apply_command;
pub use section::{SectionSpec, SectionState, SectionView};
pub use state::{FormState, initial_value};
