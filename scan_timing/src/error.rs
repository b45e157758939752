use std::io;
use std::path::PathBuf;
use thiserror::Error;
use crate::fields::FieldId;

/// A single form field whose text is not (yet) a usable number.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{} field holds {:?}, which is not a valid {}", .field.key(), .text, .expected)]
pub struct FieldError {
    pub field: FieldId,
    pub text: String,
    pub expected: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimingError {
    #[error("row {index} does not exist (timer has {n_rows} rows)")]
    RowOutOfRange { index: usize, n_rows: usize },
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot access {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("{path:?} is corrupt: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("{path:?} asks for {rows} rows, expected 1 to {max}")]
    RowCount { path: PathBuf, rows: usize, max: usize },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
