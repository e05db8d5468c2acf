//! Sort categories and their discretized length ranges
//!
//! Both ranges are closed intervals stepped in tenths. Candidates are built
//! as `k / 10.0` for integer `k` so every value is the nearest double to the
//! decimal it names.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Length separating Sort 1 from Sort 2
pub const SORT_BOUNDARY: f64 = 360.5;

/// Short-range output category: 300.0 ..= 360.0
pub const SORT_1: SortRange = SortRange::new(3000, 3600);

/// Long-range output category: 361.0 ..= 600.0
pub const SORT_2: SortRange = SortRange::new(3610, 6000);

/// Output category a segment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCategory {
    Sort1,
    Sort2,
}

impl SortCategory {
    /// Discretized range of lengths for this category
    pub fn range(&self) -> SortRange {
        match self {
            Self::Sort1 => SORT_1,
            Self::Sort2 => SORT_2,
        }
    }

    /// Presentation tag: green for Sort 1, red for Sort 2
    pub fn color_name(&self) -> &'static str {
        match self {
            Self::Sort1 => "green",
            Self::Sort2 => "red",
        }
    }
}

impl std::fmt::Display for SortCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sort1 => write!(f, "Sort 1"),
            Self::Sort2 => write!(f, "Sort 2"),
        }
    }
}

/// Closed range of lengths stepped in tenths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRange {
    first_tenth: u32,
    last_tenth: u32,
}

impl SortRange {
    /// Range from `first_tenth / 10` to `last_tenth / 10` inclusive
    pub const fn new(first_tenth: u32, last_tenth: u32) -> Self {
        Self {
            first_tenth,
            last_tenth,
        }
    }

    pub fn min(&self) -> f64 {
        f64::from(self.first_tenth) / 10.0
    }

    pub fn max(&self) -> f64 {
        f64::from(self.last_tenth) / 10.0
    }

    /// Number of discrete candidates
    pub fn len(&self) -> usize {
        (self.last_tenth - self.first_tenth + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.last_tenth < self.first_tenth
    }

    /// Whether `length` lies inside the closed interval
    pub fn contains(&self, length: f64) -> bool {
        length >= self.min() && length <= self.max()
    }

    /// All candidates in ascending order
    pub fn candidates(&self) -> Vec<f64> {
        debug!(first = self.first_tenth, last = self.last_tenth, "SortRange::candidates: called");
        (self.first_tenth..=self.last_tenth)
            .map(|k| f64::from(k) / 10.0)
            .collect()
    }
}
