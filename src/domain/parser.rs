use std::{collections::HashSet, sync::Arc};

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::schema::{DataType, FieldConfig, Layout, PageConfig, Pattern, SelectOption, Validation};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page configuration does not match the expected shape:\n{}", .issues.join("\n"))]
    Schema { issues: Vec<String> },
    #[error("failed to decode page configuration: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("field name '{0}' appears more than once")]
    DuplicateField(String),
    #[error("field '{field}' has an invalid pattern: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}

/// Wire shape of a page configuration document.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageConfigDocument {
    #[serde(alias = "fields")]
    pub form_fields: Vec<FieldDocument>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDocument {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub layout: Option<LayoutDocument>,
    #[serde(default)]
    pub input: Option<InputDocument>,
    /// Flat form used by older pages: `dataType` next to `name`.
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub validation: Option<ValidationDocument>,
    #[serde(default)]
    pub tool_tip_text: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<SelectOption>>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    #[serde(default)]
    pub form_layout: Option<PlacementDocument>,
    #[serde(default)]
    pub grid_layout: Option<PlacementDocument>,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub order: Option<f64>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacementDocument {
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub order: Option<f64>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InputDocument {
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub validation: Option<ValidationDocument>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<SelectOption>>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDocument {
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default, alias = "maxLength")]
    pub max_size: Option<usize>,
    #[serde(default)]
    pub pattern: Option<String>,
}

/// JSON Schema describing the accepted page configuration document.
pub fn page_config_schema() -> Value {
    let schema = schemars::schema_for!(PageConfigDocument);
    serde_json::to_value(schema).unwrap_or(Value::Null)
}

/// Parse a page configuration document into the immutable field model.
pub fn parse_page_config(value: &Value) -> Result<PageConfig, ConfigError> {
    let value = normalize_document(value);
    check_shape(&value)?;
    let document: PageConfigDocument = serde_json::from_value(value)?;
    build_page_config(document)
}

/// Older pages list their fields under `fields`; rename before the shape check.
fn normalize_document(value: &Value) -> Value {
    let mut value = value.clone();
    if let Value::Object(map) = &mut value
        && !map.contains_key("formFields")
        && let Some(fields) = map.remove("fields")
    {
        map.insert("formFields".to_string(), fields);
    }
    value
}

fn check_shape(value: &Value) -> Result<(), ConfigError> {
    let schema = page_config_schema();
    let validator = jsonschema::validator_for(&schema).map_err(|err| ConfigError::Schema {
        issues: vec![format!("<schema>: {err}")],
    })?;
    let issues = validator
        .iter_errors(value)
        .map(|error| {
            let pointer = error.instance_path.to_string();
            let prefix = if pointer.is_empty() {
                "<root>".to_string()
            } else {
                pointer
            };
            format!("{prefix}: {error}")
        })
        .collect::<Vec<_>>();
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Schema { issues })
    }
}

pub fn build_page_config(document: PageConfigDocument) -> Result<PageConfig, ConfigError> {
    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(document.form_fields.len());
    for raw in document.form_fields {
        if !seen.insert(raw.name.clone()) {
            return Err(ConfigError::DuplicateField(raw.name));
        }
        fields.push(Arc::new(field_from_document(raw)?));
    }
    Ok(PageConfig { fields })
}

fn field_from_document(raw: FieldDocument) -> Result<FieldConfig, ConfigError> {
    let input = raw.input.unwrap_or_default();
    let data_type = input
        .data_type
        .as_deref()
        .or(raw.data_type.as_deref())
        .map(DataType::from_tag)
        .unwrap_or_default();
    let validation = match input.validation.or(raw.validation) {
        Some(doc) => validation_from_document(&raw.name, doc)?,
        None => Validation::default(),
    };
    let layout = raw.layout.map(layout_from_document).unwrap_or_default();
    let options = raw.options.or(input.options).unwrap_or_default();

    Ok(FieldConfig {
        name: raw.name,
        label: raw.label,
        data_type,
        validation,
        layout,
        options,
        placeholder: raw.placeholder.or(input.placeholder),
        tool_tip_text: raw.tool_tip_text,
    })
}

fn validation_from_document(
    field: &str,
    doc: ValidationDocument,
) -> Result<Validation, ConfigError> {
    let pattern = doc
        .pattern
        .map(|source| {
            Pattern::new(source).map_err(|source| ConfigError::InvalidPattern {
                field: field.to_string(),
                source,
            })
        })
        .transpose()?;
    Ok(Validation {
        required: doc.required.unwrap_or(false),
        min_length: doc.min_length.filter(|min| *min > 0),
        max_size: doc.max_size.filter(|max| *max > 0),
        pattern,
        custom: None,
    })
}

fn layout_from_document(doc: LayoutDocument) -> Layout {
    let form = doc.form_layout.unwrap_or_default();
    Layout {
        section_id: form.section_id.or(doc.section_id),
        order: form.order.or(doc.order),
        grid_order: doc.grid_layout.and_then(|grid| grid.order),
    }
}
