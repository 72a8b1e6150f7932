//! Codegen error types.

use thiserror::Error;

/// Errors that can occur while compiling an interchange document.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The interchange document is not valid YAML.
    #[error("Failed to parse interchange document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A required field is missing from an entry or day record.
    #[error("Malformed interchange data: day record {position} is missing '{field}'")]
    MissingDayField { position: usize, field: &'static str },

    /// A required field is missing from a batch entry.
    #[error("Malformed interchange data: {batch} entry {position} on day {day} is missing '{field}'")]
    MissingEntryField {
        day: u32,
        batch: &'static str,
        position: usize,
        field: &'static str,
    },
}

impl CodegenError {
    /// Create a missing-field error for a day record.
    pub fn missing_day_field(position: usize, field: &'static str) -> Self {
        Self::MissingDayField { position, field }
    }

    /// Create a missing-field error for a batch entry.
    pub fn missing_entry_field(
        day: u32,
        batch: &'static str,
        position: usize,
        field: &'static str,
    ) -> Self {
        Self::MissingEntryField {
            day,
            batch,
            position,
            field,
        }
    }
}
