use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No script registered for demo: {0}")]
    MissingScript(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Unknown chat mode: {0}")]
    UnknownMode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
