#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<range_pager_core::Error> for Error {
    fn from(e: range_pager_core::Error) -> Self {
        match e {
            range_pager_core::Error::InvalidConfiguration(msg) => Error::InvalidConfiguration(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
