//! Field validation.
//!
//! Every rule runs through [`check`], which walks the checks in a fixed order
//! and stops at the first [`Violation`]. [`is_valid`] and [`field_error`] are
//! both views over that single walk, so a value that passes validation never
//! carries an error message and the message always names the failing rule.

mod rules;

use std::{collections::HashMap, sync::Arc};

use crate::domain::{CustomValidator, DataType, FieldConfig, FieldValue, PageConfig};

pub use rules::{MIN_TEL_DIGITS, valid_email, valid_tel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Required,
    Email,
    Tel,
    Custom(String),
    TooShort(usize),
    TooLong(usize),
    Pattern,
}

impl Violation {
    pub fn message(&self, label: &str) -> String {
        match self {
            Violation::Required => format!("{label} is required"),
            Violation::Email => "Please enter a valid email address".to_string(),
            Violation::Tel => "Please enter a valid phone number".to_string(),
            Violation::Custom(message) => message.clone(),
            Violation::TooShort(min) => format!("{label} must be at least {min} characters"),
            Violation::TooLong(max) => format!("{label} must be no more than {max} characters"),
            Violation::Pattern => format!("Please enter a valid {}", label.to_lowercase()),
        }
    }

    /// Only a missing required value is reported before the field is touched.
    pub fn shown_untouched(&self) -> bool {
        matches!(self, Violation::Required)
    }
}

/// First failing rule for `value`, or `Ok(())` when every rule passes.
pub fn check(field: &FieldConfig, value: &FieldValue) -> Result<(), Violation> {
    let rules = &field.validation;
    if value.is_empty() {
        return if rules.required {
            Err(Violation::Required)
        } else {
            Ok(())
        };
    }

    let text = value.as_text();
    match field.data_type {
        DataType::Email if !valid_email(&text) => return Err(Violation::Email),
        DataType::Tel if !valid_tel(&text) => return Err(Violation::Tel),
        _ => {}
    }

    if let Some(custom) = &rules.custom
        && let Some(message) = custom.check(value)
    {
        return Err(Violation::Custom(message));
    }

    // Numbers are measured by the length of their string form, same as text.
    let len = value.char_len();
    if let Some(min) = rules.min_length
        && len < min
    {
        return Err(Violation::TooShort(min));
    }
    if let Some(max) = rules.max_size
        && len > max
    {
        return Err(Violation::TooLong(max));
    }

    if let Some(pattern) = &rules.pattern
        && !pattern.is_match(&text)
    {
        return Err(Violation::Pattern);
    }

    Ok(())
}

/// `touched` does not affect validity; an absent field is always valid.
pub fn is_valid(field: Option<&FieldConfig>, value: &FieldValue, _touched: bool) -> bool {
    field.is_none_or(|field| check(field, value).is_ok())
}

pub fn field_error(field: Option<&FieldConfig>, value: &FieldValue, touched: bool) -> Option<String> {
    let field = field?;
    match check(field, value) {
        Ok(()) => None,
        Err(violation) if touched || violation.shown_untouched() => {
            Some(violation.message(&field.label))
        }
        Err(_) => None,
    }
}

/// Validation entry point handed to the form controller.
///
/// Holds the custom validators registered by field name; [`bind`] attaches
/// them to a freshly loaded page before any field state is built from it.
///
/// [`bind`]: ValidationEngine::bind
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    custom: Arc<HashMap<String, CustomValidator>>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom<F>(mut self, field_name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    {
        Arc::make_mut(&mut self.custom).insert(field_name.into(), CustomValidator::new(check));
        self
    }

    pub fn has_custom(&self, field_name: &str) -> bool {
        self.custom.contains_key(field_name)
    }

    pub fn bind(&self, page: PageConfig) -> PageConfig {
        if self.custom.is_empty() {
            return page;
        }
        let fields = page
            .fields
            .into_iter()
            .map(|field| match self.custom.get(&field.name) {
                Some(validator) => {
                    let mut bound = (*field).clone();
                    bound.validation.custom = Some(validator.clone());
                    Arc::new(bound)
                }
                None => field,
            })
            .collect();
        PageConfig { fields }
    }

    pub fn is_valid(&self, field: &FieldConfig, value: &FieldValue, touched: bool) -> bool {
        is_valid(Some(field), value, touched)
    }

    pub fn field_error(
        &self,
        field: &FieldConfig,
        value: &FieldValue,
        touched: bool,
    ) -> Option<String> {
        field_error(Some(field), value, touched)
    }

    /// First visible error across `fields`, in the order given.
    pub fn first_error<'a, I>(&self, fields: I) -> Option<(String, String)>
    where
        I: IntoIterator<Item = (&'a FieldConfig, &'a FieldValue, bool)>,
    {
        fields.into_iter().find_map(|(field, value, touched)| {
            self.field_error(field, value, touched)
                .map(|message| (field.name.clone(), message))
        })
    }
}
