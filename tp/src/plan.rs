//! Cutting plan produced by the combination finder

use serde::{Deserialize, Serialize};

use crate::ratio::Ratio;
use crate::sort::SortCategory;

/// `count` pieces of `length`, all in one sort category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub count: u64,
    pub length: f64,
    pub category: SortCategory,
}

impl Segment {
    pub fn new(count: u64, length: f64, category: SortCategory) -> Self {
        Self {
            count,
            length,
            category,
        }
    }

    pub fn sort1(count: u64, length: f64) -> Self {
        Self::new(count, length, SortCategory::Sort1)
    }

    pub fn sort2(count: u64, length: f64) -> Self {
        Self::new(count, length, SortCategory::Sort2)
    }

    /// Combined length of all pieces
    pub fn total(&self) -> f64 {
        self.count as f64 * self.length
    }
}

/// How one input tape is cut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutLine {
    /// Input tape length the segments come from
    pub source: f64,
    pub segments: Vec<Segment>,
}

impl CutLine {
    pub fn new(source: f64, segments: Vec<Segment>) -> Self {
        Self { source, segments }
    }

    /// Number of pieces in `category`
    pub fn count(&self, category: SortCategory) -> u64 {
        self.segments
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.count)
            .sum()
    }

    /// Combined length of all segments
    pub fn total(&self) -> f64 {
        self.segments.iter().map(Segment::total).sum()
    }
}

/// Which path of the finder produced a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanOrigin {
    /// Hardcoded lookup for the 960 tape
    Fixed,
    /// Single tape matched directly against a ratio
    SingleTape,
    /// Backtracking search over all tapes
    Search,
}

/// A complete cutting plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Input lengths, in the order given
    pub input: Vec<f64>,
    /// One line per resolved input tape
    pub lines: Vec<CutLine>,
    /// Reduced Sort 1 : Sort 2 ratio
    pub ratio: Ratio,
    pub origin: PlanOrigin,
}

impl Plan {
    /// Sum of the input lengths
    pub fn total(&self) -> f64 {
        self.input.iter().sum()
    }

    /// Pieces in `category` across every line
    pub fn count(&self, category: SortCategory) -> u64 {
        self.lines.iter().map(|line| line.count(category)).sum()
    }

    /// Whether the aggregate counts reduce to this plan's ratio and that ratio is allowed
    pub fn is_valid(&self) -> bool {
        Ratio::reduce(self.count(SortCategory::Sort1), self.count(SortCategory::Sort2))
            .is_some_and(|reduced| reduced == self.ratio && reduced.is_allowed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> Plan {
        Plan {
            input: vec![620.0, 400.0],
            lines: vec![
                CutLine::new(620.0, vec![Segment::sort1(2, 310.0)]),
                CutLine::new(400.0, vec![Segment::sort2(1, 400.0)]),
            ],
            ratio: Ratio::new(2, 1),
            origin: PlanOrigin::Search,
        }
    }

    #[test]
    fn test_counts() {
        let plan = sample_plan();
        assert_eq!(plan.count(SortCategory::Sort1), 2);
        assert_eq!(plan.count(SortCategory::Sort2), 1);
        assert_eq!(plan.total(), 1020.0);
    }

    #[test]
    fn test_line_total() {
        let line = CutLine::new(661.0, vec![Segment::sort1(1, 300.0), Segment::sort2(1, 361.0)]);
        assert_eq!(line.total(), 661.0);
        assert_eq!(line.count(SortCategory::Sort1), 1);
        assert_eq!(line.count(SortCategory::Sort2), 1);
    }

    #[test]
    fn test_is_valid() {
        let plan = sample_plan();
        assert!(plan.is_valid());

        let mut wrong_ratio = sample_plan();
        wrong_ratio.ratio = Ratio::new(3, 2);
        assert!(!wrong_ratio.is_valid());

        let mut disallowed = sample_plan();
        disallowed.lines.push(CutLine::new(400.0, vec![Segment::sort2(1, 400.0)]));
        disallowed.ratio = Ratio::new(1, 1);
        assert!(!disallowed.is_valid());
    }

    #[test]
    fn test_plan_serde() {
        let plan = sample_plan();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["ratio"], "2:1");
        assert_eq!(json["origin"], "search");
        assert_eq!(json["lines"][0]["segments"][0]["category"], "sort1");

        let back: Plan = serde_json::from_value(json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_origin_serde() {
        let json = serde_json::to_string(&PlanOrigin::SingleTape).unwrap();
        assert_eq!(json, "\"single-tape\"");
    }
}
