use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::value::FieldValue;

/// Ordered mapping of field name to value exchanged with the save endpoint.
pub type EntityData = IndexMap<String, FieldValue>;

/// Key under which the entity identifier travels in a saved payload.
pub const ENTITY_ID_KEY: &str = "id";

#[derive(Debug, Clone)]
pub struct PageConfig {
    pub fields: Vec<Arc<FieldConfig>>,
}

impl PageConfig {
    pub fn field(&self, name: &str) -> Option<&Arc<FieldConfig>> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Declarative description of one form field. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub name: String,
    pub label: String,
    pub data_type: DataType,
    pub validation: Validation,
    pub layout: Layout,
    pub options: Vec<SelectOption>,
    pub placeholder: Option<String>,
    pub tool_tip_text: Option<String>,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, label: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            data_type,
            validation: Validation::default(),
            layout: Layout::default(),
            options: Vec::new(),
            placeholder: None,
            tool_tip_text: None,
        }
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_tool_tip(mut self, text: impl Into<String>) -> Self {
        self.tool_tip_text = Some(text.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.validation.required
    }

    /// Hint shown inside an empty control; `placeholder` wins over the tooltip.
    pub fn placeholder_text(&self) -> &str {
        self.placeholder
            .as_deref()
            .or(self.tool_tip_text.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    #[default]
    Text,
    Number,
    Email,
    Tel,
    Password,
    Textarea,
    Select,
    Unknown,
}

impl DataType {
    /// Maps a wire tag onto the closed set; unrecognised tags become `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "text" => DataType::Text,
            "number" => DataType::Number,
            "email" => DataType::Email,
            "tel" => DataType::Tel,
            "password" => DataType::Password,
            "textarea" => DataType::Textarea,
            "select" => DataType::Select,
            _ => DataType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Text => "text",
            DataType::Number => "number",
            DataType::Email => "email",
            DataType::Tel => "tel",
            DataType::Password => "password",
            DataType::Textarea => "textarea",
            DataType::Select => "select",
            DataType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validation {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_size: Option<usize>,
    pub pattern: Option<Pattern>,
    pub custom: Option<CustomValidator>,
}

impl Validation {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_size(mut self, max: usize) -> Self {
        self.max_size = Some(max);
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_custom(mut self, validator: CustomValidator) -> Self {
        self.custom = Some(validator);
        self
    }
}

/// A regular expression compiled when the page configuration loads.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&source)?;
        Ok(Self { source, regex })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

type ValidatorFn = dyn Fn(&FieldValue) -> Option<String> + Send + Sync;

/// Caller supplied rule; a returned message marks the value invalid.
#[derive(Clone)]
pub struct CustomValidator(Arc<ValidatorFn>);

impl CustomValidator {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    pub fn check(&self, value: &FieldValue) -> Option<String> {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomValidator(..)")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub section_id: Option<String>,
    pub order: Option<f64>,
    pub grid_order: Option<f64>,
}

impl Layout {
    pub fn section(section_id: impl Into<String>) -> Self {
        Self {
            section_id: Some(section_id.into()),
            ..Self::default()
        }
    }

    pub fn in_section(section_id: impl Into<String>, order: f64) -> Self {
        Self {
            section_id: Some(section_id.into()),
            order: Some(order),
            grid_order: None,
        }
    }

    pub fn with_grid_order(mut self, order: f64) -> Self {
        self.grid_order = Some(order);
        self
    }

    pub fn sort_key(&self) -> f64 {
        self.order.unwrap_or(0.0)
    }

    pub fn grid_sort_key(&self) -> f64 {
        self.grid_order.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
