use thiserror::Error;

use crate::core::types::MonsterTypeId;

#[derive(Error, Debug)]
pub enum EffectError {
    #[error("Monster type not found: {0}")]
    UnknownMonsterType(MonsterTypeId),

    #[error("Duplicate {kind} definition: {id}")]
    DuplicateDefinition { kind: &'static str, id: String },

    #[error("{owner} references unknown {kind} '{id}'")]
    UnknownReference {
        kind: &'static str,
        owner: String,
        id: String,
    },

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse {path}: {message}")]
    Toml { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl EffectError {
    /// Wrap a TOML decode failure with the source it came from
    pub fn toml(path: impl Into<String>, err: toml::de::Error) -> Self {
        EffectError::Toml {
            path: path.into(),
            message: err.message().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EffectError>;
