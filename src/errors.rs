use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpesaError {
    #[error("Invalid value: {0}")]
    Parse(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Storage error: {0}")]
    Storage(#[from] serde_json::Error),
}
