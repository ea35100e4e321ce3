mod base;
pub(crate) mod helpers;
mod number;
mod select;
mod text;
mod textarea;

use crate::domain::FieldConfig;

pub use base::{ComponentKind, SelectStateRef};
pub(crate) use base::FieldComponent;
pub use number::NumberComponent;
pub use select::SelectComponent;
pub use text::TextComponent;
pub use textarea::TextAreaComponent;

/// Builds the input control for a field from its declared data type.
pub(crate) fn build_component(config: &FieldConfig) -> Box<dyn FieldComponent> {
    match ComponentKind::for_data_type(config.data_type) {
        ComponentKind::NumberInput => Box::new(NumberComponent::new()),
        ComponentKind::TextArea => Box::new(TextAreaComponent::new()),
        ComponentKind::Select => Box::new(SelectComponent::new(&config.options)),
        kind => Box::new(TextComponent::new(kind)),
    }
}
