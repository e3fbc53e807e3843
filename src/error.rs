use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid chip count {0}, expected {min}..={max}", min = crate::MIN_CHIPS, max = crate::MAX_CHIPS)]
    InvalidChipCount(usize),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
