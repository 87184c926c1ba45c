use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::options::OptionKey;

/// Failure reading or writing the JSON settings file.
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    /// The file parsed, but its top level is not a JSON object.
    NotAnObject { path: PathBuf },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "settings file {}: {source}", path.display())
            }
            StoreError::Json { path, source } => {
                write!(f, "settings file {} is not valid JSON: {source}", path.display())
            }
            StoreError::NotAnObject { path } => {
                write!(f, "settings file {} must contain a JSON object", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Json { source, .. } => Some(source),
            StoreError::NotAnObject { .. } => None,
        }
    }
}

/// A bar option name or value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    UnknownKey(String),
    InvalidValue { key: OptionKey, value: String, reason: String },
}

impl OptionsError {
    pub(crate) fn invalid(key: OptionKey, value: &str, reason: impl Into<String>) -> Self {
        OptionsError::InvalidValue { key, value: value.to_string(), reason: reason.into() }
    }
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::UnknownKey(k) => write!(f, "unknown option {k:?}"),
            OptionsError::InvalidValue { key, value, reason } => {
                write!(f, "invalid value {value:?} for {key}: {reason}")
            }
        }
    }
}

impl std::error::Error for OptionsError {}

/// The page's rating text could not be turned into a rating.
#[derive(Debug, Clone, PartialEq)]
pub enum RatingError {
    Empty,
    NotANumber(String),
    /// Outside `[0, 5]`.
    OutOfRange(f64),
}

impl fmt::Display for RatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingError::Empty => f.write_str("rating text is empty"),
            RatingError::NotANumber(s) => write!(f, "rating text {s:?} is not a number"),
            RatingError::OutOfRange(v) => write!(f, "rating {v} is outside 0..=5"),
        }
    }
}

impl std::error::Error for RatingError {}
