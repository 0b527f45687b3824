// src/error/types.rs
use serde::Serialize;
use thiserror::Error;

/// Infrastructure-level errors.
///
/// Business failures (validation, not-found on mutation, movability) are
/// never reported here; they travel as `CatalogResult` values. This channel
/// is reserved for failing collaborators and programmer errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
