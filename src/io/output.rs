use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::EntityData;

use super::DocumentFormat;

/// Where the last saved entity is written when the UI exits.
#[derive(Debug, Clone)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }

    fn describe(&self) -> String {
        match self {
            OutputDestination::Stdout => "stdout".to_string(),
            OutputDestination::File(path) => format!("file {}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    pub destinations: Vec<OutputDestination>,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            destinations: vec![OutputDestination::Stdout],
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

pub fn emit_entity(entity: &EntityData, options: &OutputOptions) -> Result<()> {
    let value = serde_json::to_value(entity).context("failed to encode saved entity")?;
    emit(&value, options)
}

pub fn emit(value: &Value, options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        return Ok(());
    }
    let payload = render(value, options)?;
    for destination in &options.destinations {
        write_payload(destination, &payload)
            .with_context(|| format!("failed to write to {}", destination.describe()))?;
    }
    Ok(())
}

fn render(value: &Value, options: &OutputOptions) -> Result<String> {
    match (options.format, options.pretty) {
        (DocumentFormat::Json, true) => {
            serde_json::to_string_pretty(value).context("failed to serialize JSON")
        }
        (DocumentFormat::Json, false) => {
            serde_json::to_string(value).context("failed to serialize JSON")
        }
        #[cfg(feature = "yaml")]
        (DocumentFormat::Yaml, _) => {
            serde_yaml::to_string(value).context("failed to serialize YAML")
        }
        #[cfg(feature = "toml")]
        (DocumentFormat::Toml, true) => {
            toml::to_string_pretty(value).context("failed to serialize TOML")
        }
        #[cfg(feature = "toml")]
        (DocumentFormat::Toml, false) => toml::to_string(value).context("failed to serialize TOML"),
    }
}

fn write_payload(destination: &OutputDestination, payload: &str) -> io::Result<()> {
    let mut sink: Box<dyn Write> = match destination {
        OutputDestination::Stdout => Box::new(io::stdout().lock()),
        OutputDestination::File(path) => Box::new(File::create(path)?),
    };
    sink.write_all(payload.as_bytes())?;
    if !payload.ends_with('\n') {
        sink.write_all(b"\n")?;
    }
    sink.flush()
}
