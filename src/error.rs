use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Session commands rejected by the state machine.
///
/// These are refusals, not failures: the session is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session is not in the playing phase")]
    NotPlaying,

    #[error("all {max} hints for this level are used")]
    HintsExhausted { max: u32 },

    #[error("level is not complete while words remain")]
    LevelNotComplete,
}
