//! Ordered list of tape entries owned by the front end
//!
//! Entries are kept as the raw text the operator typed. They are validated
//! only when a plan is requested, so the finder never sees an empty or
//! malformed list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TapeError;
use crate::finder::find_combinations;
use crate::plan::Plan;

/// Bounds applied to each entry before it reaches the finder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Shortest accepted tape
    #[serde(rename = "min-length")]
    pub min_length: f64,

    /// Longest accepted tape
    #[serde(rename = "max-length")]
    pub max_length: f64,

    /// Maximum digits after the decimal point
    #[serde(rename = "max-decimals")]
    pub max_decimals: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_length: 300.0,
            max_length: 1_000_000.0,
            max_decimals: 2,
        }
    }
}

impl InputLimits {
    /// Parse and bounds-check a single non-blank entry
    pub fn check(&self, entry: &str) -> Result<f64, TapeError> {
        debug!(entry, "InputLimits::check: called");
        let entry = entry.trim();
        let value: f64 = entry.parse().map_err(|_| TapeError::InvalidLength {
            entry: entry.to_string(),
        })?;
        if !value.is_finite() {
            return Err(TapeError::NotFinite {
                entry: entry.to_string(),
            });
        }
        if decimals(entry) > self.max_decimals {
            return Err(TapeError::TooManyDecimals {
                entry: entry.to_string(),
                max: self.max_decimals,
            });
        }
        if value < self.min_length {
            return Err(TapeError::BelowMinimum {
                value,
                min: self.min_length,
            });
        }
        if value > self.max_length {
            return Err(TapeError::AboveMaximum {
                value,
                max: self.max_length,
            });
        }
        Ok(value)
    }
}

/// Digits after the decimal point, ignoring any exponent
fn decimals(entry: &str) -> usize {
    let mantissa = entry.split(['e', 'E']).next().unwrap_or(entry);
    mantissa.split_once('.').map_or(0, |(_, fraction)| fraction.len())
}

/// Ordered, editable list of tape entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TapeList {
    entries: Vec<String>,
}

impl TapeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn add(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        debug!(%entry, "TapeList::add: called");
        self.entries.push(entry);
    }

    /// Remove the most recently added entry
    pub fn delete_last(&mut self) -> Option<String> {
        let removed = self.entries.pop();
        debug!(?removed, "TapeList::delete_last: called");
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validated lengths in entry order; blank entries are skipped
    pub fn lengths(&self, limits: &InputLimits) -> Result<Vec<f64>, TapeError> {
        debug!(entries = self.entries.len(), "TapeList::lengths: called");
        let lengths = self
            .entries
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(|entry| limits.check(entry))
            .collect::<Result<Vec<f64>, TapeError>>()?;

        if lengths.is_empty() {
            return Err(TapeError::NoLengths);
        }
        Ok(lengths)
    }

    /// Validate the entries and run the finder on them
    pub fn plan(&self, limits: &InputLimits) -> Result<Option<Plan>, TapeError> {
        let lengths = self.lengths(limits)?;
        Ok(find_combinations(&lengths))
    }
}

impl<S: Into<String>> FromIterator<S> for TapeList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
