use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Entity API error: {0}")]
    Upstream(#[from] anyhow::Error),
}

impl From<envy::Error> for MessagingError {
    fn from(err: envy::Error) -> Self {
        MessagingError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MessagingError>;
