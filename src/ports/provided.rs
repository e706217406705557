use crate::common::duration::DurationParseError;
use std::num::ParseIntError;
use thiserror::Error;

/// Failure of a single `EnvAccessor` coercion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Variable absent or set to the empty string.
    #[error("Env '{key}' should be set")]
    MissingVariable { key: String },

    #[error("Cant parse '{key}' with value '{value}' as integer")]
    InvalidInteger {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Cant parse '{key}' with value '{value}' as time duration")]
    InvalidDuration {
        key: String,
        value: String,
        #[source]
        source: DurationParseError,
    },

    #[error("Can't split '{value}' with separator '{separator}' to slice of strings")]
    EmptySlice { value: String, separator: String },

    #[error("Can't split '{value}' with separator '{separator}' by pair separator '{pair_separator}' as map of strings")]
    EmptyMap {
        value: String,
        separator: String,
        pair_separator: String,
    },
}

impl EnvError {
    /// Formatted variable name, for the variants that carry one.
    pub fn key(&self) -> Option<&str> {
        match self {
            EnvError::MissingVariable { key }
            | EnvError::InvalidInteger { key, .. }
            | EnvError::InvalidDuration { key, .. } => Some(key),
            EnvError::EmptySlice { .. } | EnvError::EmptyMap { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;
