use std::{fmt, path::Path};

/// Document formats accepted for fixtures and emitted for saved entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "toml")]
    Toml,
}

impl DocumentFormat {
    pub fn available_formats() -> &'static [DocumentFormat] {
        &[
            DocumentFormat::Json,
            #[cfg(feature = "yaml")]
            DocumentFormat::Yaml,
            #[cfg(feature = "toml")]
            DocumentFormat::Toml,
        ]
    }

    /// Format implied by a file extension, when it names an enabled format.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DocumentFormat::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            #[cfg(feature = "toml")]
            "toml" => Some(DocumentFormat::Toml),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::available_formats()
            .iter()
            .copied()
            .find(|format| format.to_string().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            #[cfg(feature = "yaml")]
            DocumentFormat::Yaml => write!(f, "yaml"),
            #[cfg(feature = "toml")]
            DocumentFormat::Toml => write!(f, "toml"),
        }
    }
}
