use std::path::PathBuf;

use thiserror::Error;

use crate::state::ParamId;

/// Failure to produce the model output.
///
/// `Validation` is the only case a user ever sees; its display text is the
/// message shown in place of the serialized model.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Заполните все параметры")]
    Validation,
    #[error("failed to serialize model: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed declares param id {0} more than once")]
    DuplicateId(ParamId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
