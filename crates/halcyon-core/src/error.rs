use thiserror::Error;

#[derive(Debug, Error)]
pub enum HalcyonError {
    #[error("unknown theme identifier: {0:?}")]
    UnknownTheme(String),

    #[error("unknown export format: {0:?}")]
    UnknownFormat(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
