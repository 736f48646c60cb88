// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use std::path::PathBuf;
use thiserror::Error;

/// Failure to build the dataset. Cloneable so a failed load can be cached
/// and handed back to every later caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataLoadError {
    #[error("Airport dataset not found (searched: {})", display_paths(.0))]
    Missing(Vec<PathBuf>),
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },
    #[error("Failed to decompress airport dataset: {0}")]
    Decompress(String),
    #[error("Airport dataset is not a JSON array of airport records: {0}")]
    Malformed(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AirportError {
    /// The input was rejected before any lookup ran.
    #[error("Invalid input '{value}': expected {expected}")]
    InvalidInput { value: String, expected: String },
    /// Well-formed input with zero matching records.
    #[error("No airport found with {field}: {value}")]
    NotFound { field: &'static str, value: String },
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
}

impl AirportError {
    pub fn invalid(value: impl Into<String>, expected: impl Into<String>) -> Self {
        AirportError::InvalidInput {
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub fn not_found(field: &'static str, value: impl Into<String>) -> Self {
        AirportError::NotFound {
            field,
            value: value.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AirportError::InvalidInput { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AirportError::NotFound { .. })
    }
}

pub type Result<T, E = AirportError> = std::result::Result<T, E>;
