//! Tape Planner - cut raw tapes into Sort 1 / Sort 2 segments
//!
//! Given a handful of raw tape lengths, find how to cut them into short
//! "Sort 1" pieces (300.0 - 360.0 m) and long "Sort 2" pieces
//! (361.0 - 600.0 m) so that the piece counts land on a 2:1, 5:2 or 3:2 ratio.
//!
//! # Modules
//!
//! - [`finder`] - the combination search (pure, deterministic)
//! - [`sort`] / [`ratio`] - hardcoded ranges and allowed ratios
//! - [`plan`] - the resulting cutting plan
//! - [`render`] - text, HTML and JSON output
//! - [`tapes`] - operator-owned tape list and input validation
//! - [`session`] - interactive tape entry
//! - [`config`] / [`cli`] - configuration and command-line interface
//!
//! # Example
//!
//! ```
//! use tapeplanner::{find_combinations, Ratio};
//!
//! let plan = find_combinations(&[620.0, 400.0]).unwrap();
//! assert_eq!(plan.ratio, Ratio::new(2, 1));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod plan;
pub mod ratio;
pub mod render;
pub mod session;
pub mod sort;
pub mod tapes;

pub use config::{Config, OutputConfig};
pub use error::TapeError;
pub use finder::{Candidates, backtrack, find_combinations};
pub use plan::{CutLine, Plan, PlanOrigin, Segment};
pub use ratio::{ALLOWED_RATIOS, Ratio};
pub use render::{OutputFormat, render};
pub use session::{Session, SessionCommand};
pub use sort::{SORT_1, SORT_2, SortCategory, SortRange};
pub use tapes::{InputLimits, TapeList};

/// Shown when the finder returns no plan
pub const NO_SOLUTION_WARNING: &str = "No valid combinations found. Please add more tapes.";

/// Shown when a plan is requested before any tape was entered
pub const EMPTY_INPUT_WARNING: &str = "Please enter at least one tape length.";
