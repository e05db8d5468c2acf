//! Input validation errors

use thiserror::Error;

/// Errors raised while turning operator input into tape lengths
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TapeError {
    #[error("{}", crate::EMPTY_INPUT_WARNING)]
    NoLengths,

    #[error("Not a number: {entry}")]
    InvalidLength { entry: String },

    #[error("Not a finite length: {entry}")]
    NotFinite { entry: String },

    #[error("Tape length {value} is below the minimum of {min} m")]
    BelowMinimum { value: f64, min: f64 },

    #[error("Tape length {value} is above the maximum of {max} m")]
    AboveMaximum { value: f64, max: f64 },

    #[error("Tape length {entry} has more than {max} decimal places")]
    TooManyDecimals { entry: String, max: usize },
}
