//! Error types
//!
//!     Tokenizing never fails: malformed or truncated markup is reported in-band as
//!     [TokenKind::Error](crate::xml::TokenKind::Error) tokens. [PatternError] is returned when
//!     a caller compiles its own [Pattern](crate::Pattern); [Error] covers configuration and
//!     I/O in applications such as the binary.

use thiserror::Error;

/// A regular expression could not be compiled.
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    #[error("invalid pattern `{name}`: {source}")]
    Invalid {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// Error for applications built on the tokenizer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}
