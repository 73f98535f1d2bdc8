use std::path::PathBuf;

/// An illegal move. Every variant is rejected without touching the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: column {column} is outside the board")]
    InvalidColumn { column: i64 },

    #[error("illegal move: column {column} is full")]
    ColumnFull { column: usize },

    #[error("illegal move: the game is already finished")]
    GameOver,
}

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
