//! Error types shared by the href_kit helpers

use thiserror::Error;

/// Errors raised by the fallible helpers in this crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("'{url}' is not an http(s) link; check it against the pattern {pattern}")]
    InvalidUrlFormat { url: String, pattern: &'static str },

    #[error("cannot draw {count} distinct integers between {min} and {max}")]
    RangeTooSmall { min: i64, max: i64, count: usize },

    #[error("every integer between {min} and {max} is excluded")]
    ExhaustedRange { min: i64, max: i64 },

    #[error("invalid proportions: {0}")]
    InvalidProportions(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for href_kit operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<::config::ConfigError> for Error {
    fn from(err: ::config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}
