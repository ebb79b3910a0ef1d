use crate::core::models::template::{ConnectionTemplate, InteractionKind, TemplateError, TemplateSpec};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplateFile {
    #[serde(default)]
    templates: Vec<TemplateSpec>,
}

/// An ordered collection of connection templates loaded from a TOML file.
///
/// ```toml
/// [[templates]]
/// kind = "bond"
/// type = "Backbone"
/// atoms = ["ca", "ca"]
/// offsets = [0, 1]
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateLibrary {
    templates: Vec<ConnectionTemplate>,
}

impl TemplateLibrary {
    pub fn load(path: &Path) -> Result<Self, TemplateLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TemplateLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| e.with_path(path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, TemplateLoadError> {
        let file: TemplateFile = toml::from_str(content).map_err(|e| TemplateLoadError::Toml {
            path: String::new(),
            source: e,
        })?;
        let templates = file
            .templates
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                ConnectionTemplate::try_from(spec).map_err(|source| TemplateLoadError::Invalid {
                    path: String::new(),
                    entry: i + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[ConnectionTemplate] {
        &self.templates
    }

    pub fn of_kind(&self, kind: InteractionKind) -> impl Iterator<Item = &ConnectionTemplate> {
        self.templates.iter().filter(move |t| t.kind() == kind)
    }

    pub fn into_templates(self) -> Vec<ConnectionTemplate> {
        self.templates
    }
}

#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid template #{entry} in '{path}': {source}")]
    Invalid {
        path: String,
        entry: usize,
        source: TemplateError,
    },
}

impl TemplateLoadError {
    fn with_path(self, path: &Path) -> Self {
        let path = path.to_string_lossy().to_string();
        match self {
            Self::Io { source, .. } => Self::Io { path, source },
            Self::Toml { source, .. } => Self::Toml { path, source },
            Self::Invalid { entry, source, .. } => Self::Invalid {
                path,
                entry,
                source,
            },
        }
    }
}
