use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No signed-in user")]
    NotSignedIn,

    #[error("Viewer not found: {0}")]
    ViewerNotFound(String),

    #[error("Entity API error: {0}")]
    Upstream(#[from] anyhow::Error),
}

impl From<envy::Error> for RankingError {
    fn from(err: envy::Error) -> Self {
        RankingError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RankingError>;
