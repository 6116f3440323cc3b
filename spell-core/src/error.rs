//! Error types for entity validation and casting resolution.

use thiserror::Error;

/// A caller supplied a value outside one of the fixed rule sets.
///
/// Raised at construction time, before any derived field is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{value} is not a valid {kind} option. Known options are {}", .valid.join(", "))]
    UnknownOption {
        kind: &'static str,
        value: String,
        valid: Vec<&'static str>,
    },
    #[error("{field} {value} is outside the {table} (valid: {min}..={max})")]
    OutOfTable {
        table: &'static str,
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ValidationError {
    /// The offending value, as supplied.
    pub fn value(&self) -> String {
        match self {
            ValidationError::UnknownOption { value, .. } => value.clone(),
            ValidationError::OutOfTable { value, .. } => value.to_string(),
        }
    }
}

/// Error from resolving a casting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    #[error("Power level must be at least 1 (got 0)")]
    ZeroPowerLevel,
    #[error("Cast skill difficulty is zero (skill difficulty {skill_difficulty}, power level {power_level})")]
    ZeroCastDifficulty {
        skill_difficulty: i32,
        power_level: u32,
    },
}
