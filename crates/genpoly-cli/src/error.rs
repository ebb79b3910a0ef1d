use genpoly::core::io::lt::LtError;
use genpoly::core::io::raw::RawInputError;
use genpoly::core::templates::library::TemplateLoadError;
use genpoly::engine::config::ConfigError;
use genpoly::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EngineError),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Templates(#[from] TemplateLoadError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn parsing(path: impl Into<PathBuf>, source: RawInputError) -> Self {
        Self::FileParsing {
            path: path.into(),
            source: source.into(),
        }
    }
}

impl From<LtError> for CliError {
    fn from(e: LtError) -> Self {
        match e {
            LtError::Io(io) => Self::Io(io),
        }
    }
}
