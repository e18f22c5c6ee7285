use thiserror::Error;

/// Termline error types
#[derive(Error, Debug)]
pub enum TermlineError {
    #[error("Invalid style option: {0}")]
    InvalidStyleOption(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for termline operations
pub type Result<T> = std::result::Result<T, TermlineError>;
