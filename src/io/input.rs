use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Table>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Reads a document from disk, picking the format from its extension unless
/// one is given.
pub fn load_document(path: &Path, format: Option<DocumentFormat>) -> Result<Value> {
    let format = format
        .or_else(|| DocumentFormat::from_path(path))
        .unwrap_or_default();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_document_str(&contents, format)
        .with_context(|| format!("failed to load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_json_documents() {
        let raw = "{\"pages\":{\"orders\":{\"formFields\":[]}}}";
        let parsed = parse_document_str(raw, DocumentFormat::Json).unwrap();
        assert_eq!(parsed["pages"]["orders"]["formFields"], json!([]));
    }

    #[test]
    fn reports_malformed_json() {
        let err = parse_document_str("{", DocumentFormat::Json).unwrap_err();
        assert!(err.to_string().contains("JSON"));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn parse_yaml_documents() {
        let raw = "pages:\n  orders:\n    formFields: []\n";
        let parsed = parse_document_str(raw, DocumentFormat::Yaml).unwrap();
        assert_eq!(parsed["pages"]["orders"]["formFields"], json!([]));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parse_toml_documents() {
        let raw = "[[pages.orders.formFields]]\nname = \"email\"\nlabel = \"Email\"";
        let parsed = parse_document_str(raw, DocumentFormat::Toml).unwrap();
        assert_eq!(parsed["pages"]["orders"]["formFields"][0]["name"], json!("email"));
    }
}
