// shared/src/lib.rs

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("missing query context: {0}")]
    MissingContext(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
