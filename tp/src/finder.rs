//! Combination search
//!
//! Given one or more tape lengths, find how to cut them into Sort 1 and
//! Sort 2 segments so that the total segment counts reduce to one of the
//! [`ALLOWED_RATIOS`].
//!
//! A single tape is first matched directly against each ratio. Otherwise every
//! tape is resolved in order by one of four strategies, tried in priority
//! order with depth-first backtracking:
//!
//! 1. direct pair: one Sort 1 plus one Sort 2 piece, limited to
//!    [`DIRECT_PAIR_BUDGET`] + 1 trials
//! 2. whole tape as repeated Sort 1 pieces
//! 3. whole tape as repeated Sort 2 pieces
//! 4. residual: one Sort 1 piece whose remainder is exactly a Sort 2 candidate
//!
//! The search is pure: no shared state, same input gives the same plan.

use tracing::{debug, info};

use crate::plan::{CutLine, Plan, PlanOrigin, Segment};
use crate::ratio::{ALLOWED_RATIOS, Ratio};
use crate::sort::{SORT_1, SORT_2};

/// Absolute tolerance when comparing sums of candidates with a tape length
pub const TOLERANCE: f64 = 1e-3;

/// Direct-pair trials stop once this many have been made without success
pub const DIRECT_PAIR_BUDGET: usize = 10;

/// Tape length answered by a fixed plan instead of a search
pub const FIXED_LENGTH: f64 = 960.0;

/// Largest piece count a whole-tape split may produce
pub const MAX_PIECES: u64 = u32::MAX as u64;

/// Discretized Sort 1 and Sort 2 candidate lengths
#[derive(Debug, Clone)]
pub struct Candidates {
    pub sort1: Vec<f64>,
    pub sort2: Vec<f64>,
}

impl Candidates {
    pub fn new() -> Self {
        Self {
            sort1: SORT_1.candidates(),
            sort2: SORT_2.candidates(),
        }
    }
}

impl Default for Candidates {
    fn default() -> Self {
        Self::new()
    }
}

/// Find a cutting plan for `lengths`, or `None` if no allowed ratio is reachable
pub fn find_combinations(lengths: &[f64]) -> Option<Plan> {
    debug!(?lengths, "find_combinations: called");
    let candidates = Candidates::new();

    if let [length] = lengths {
        if *length == FIXED_LENGTH {
            info!(length, "find_combinations: fixed plan");
            return Some(fixed_plan());
        }
        if let Some(plan) = single_tape(*length, &candidates) {
            info!(length, ratio = %plan.ratio, "find_combinations: single tape matched");
            return Some(plan);
        }
        debug!(length, "find_combinations: no direct ratio match, falling back to search");
    }

    match backtrack(lengths, &candidates) {
        Some((lines, ratio)) => {
            info!(tapes = lengths.len(), %ratio, "find_combinations: search succeeded");
            Some(Plan {
                input: lengths.to_vec(),
                lines,
                ratio,
                origin: PlanOrigin::Search,
            })
        }
        None => {
            info!(tapes = lengths.len(), "find_combinations: no valid combination");
            None
        }
    }
}

/// The hardcoded answer for a single 960 tape
pub fn fixed_plan() -> Plan {
    Plan {
        input: vec![FIXED_LENGTH],
        lines: vec![CutLine::new(
            FIXED_LENGTH,
            vec![Segment::sort1(2, 300.0), Segment::sort2(1, 360.0)],
        )],
        ratio: Ratio::new(2, 1),
        origin: PlanOrigin::Fixed,
    }
}

/// Match one tape against each allowed ratio: `n1 * s1 + n2 * s2 == length`
///
/// Ratios are tried in [`ALLOWED_RATIOS`] order, then Sort 1 candidates, then
/// Sort 2 candidates; the first match wins.
pub fn single_tape(length: f64, candidates: &Candidates) -> Option<Plan> {
    debug!(length, "single_tape: called");
    for ratio in ALLOWED_RATIOS {
        let n1 = ratio.sort1 as f64;
        let n2 = ratio.sort2 as f64;
        for &s1 in &candidates.sort1 {
            for &s2 in &candidates.sort2 {
                if (n1 * s1 + n2 * s2 - length).abs() < TOLERANCE {
                    debug!(%ratio, s1, s2, "single_tape: match");
                    return Some(Plan {
                        input: vec![length],
                        lines: vec![CutLine::new(
                            length,
                            vec![Segment::sort1(ratio.sort1, s1), Segment::sort2(ratio.sort2, s2)],
                        )],
                        ratio,
                        origin: PlanOrigin::SingleTape,
                    });
                }
            }
        }
    }
    None
}

/// Resolve every tape in order, backtracking until the totals reduce to an allowed ratio
///
/// Returns one [`CutLine`] per tape plus the reduced ratio.
pub fn backtrack(lengths: &[f64], candidates: &Candidates) -> Option<(Vec<CutLine>, Ratio)> {
    debug!(tapes = lengths.len(), "backtrack: called");
    let search = Search { lengths, candidates };
    let mut lines = Vec::with_capacity(lengths.len());
    let ratio = search.resolve(0, Tally::default(), &mut lines)?;
    Some((lines, ratio))
}

/// Running Sort 1 / Sort 2 piece counts
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    sort1: u64,
    sort2: u64,
}

impl Tally {
    fn add(self, sort1: u64, sort2: u64) -> Self {
        Self {
            sort1: self.sort1.saturating_add(sort1),
            sort2: self.sort2.saturating_add(sort2),
        }
    }
}

struct Search<'a> {
    lengths: &'a [f64],
    candidates: &'a Candidates,
}

impl Search<'_> {
    fn resolve(&self, index: usize, tally: Tally, lines: &mut Vec<CutLine>) -> Option<Ratio> {
        let Some(&length) = self.lengths.get(index) else {
            let reduced = Ratio::reduce(tally.sort1, tally.sort2).filter(Ratio::is_allowed);
            debug!(sort1 = tally.sort1, sort2 = tally.sort2, accepted = reduced.is_some(), "Search::resolve: leaf");
            return reduced;
        };

        self.direct_pair(index, length, tally, lines)
            .or_else(|| self.sort1_split(index, length, tally, lines))
            .or_else(|| self.sort2_split(index, length, tally, lines))
            .or_else(|| self.residual_split(index, length, tally, lines))
    }

    /// Record `line`, resolve the next tape, and undo the record on failure
    fn descend(&self, index: usize, line: CutLine, tally: Tally, lines: &mut Vec<CutLine>) -> Option<Ratio> {
        lines.push(line);
        let found = self.resolve(index + 1, tally, lines);
        if found.is_none() {
            lines.pop();
        }
        found
    }

    fn direct_pair(&self, index: usize, length: f64, tally: Tally, lines: &mut Vec<CutLine>) -> Option<Ratio> {
        let mut tried = 0;
        for &s1 in &self.candidates.sort1 {
            for &s2 in &self.candidates.sort2 {
                if (s1 + s2 - length).abs() < TOLERANCE {
                    let line = CutLine::new(length, vec![Segment::sort1(1, s1), Segment::sort2(1, s2)]);
                    if let Some(ratio) = self.descend(index, line, tally.add(1, 1), lines) {
                        return Some(ratio);
                    }
                }
                tried += 1;
                if tried > DIRECT_PAIR_BUDGET {
                    debug!(index, length, "Search::direct_pair: trial budget spent");
                    return None;
                }
            }
        }
        None
    }

    fn sort1_split(&self, index: usize, length: f64, tally: Tally, lines: &mut Vec<CutLine>) -> Option<Ratio> {
        for &s1 in &self.candidates.sort1 {
            if (length % s1).abs() < TOLERANCE {
                let Some(pieces) = piece_count(length, s1) else {
                    continue;
                };
                let line = CutLine::new(length, vec![Segment::sort1(pieces, s1)]);
                if let Some(ratio) = self.descend(index, line, tally.add(pieces, 0), lines) {
                    return Some(ratio);
                }
            }
        }
        None
    }

    fn sort2_split(&self, index: usize, length: f64, tally: Tally, lines: &mut Vec<CutLine>) -> Option<Ratio> {
        for &s2 in &self.candidates.sort2 {
            if (length % s2).abs() < TOLERANCE {
                let Some(pieces) = piece_count(length, s2) else {
                    continue;
                };
                let line = CutLine::new(length, vec![Segment::sort2(pieces, s2)]);
                if let Some(ratio) = self.descend(index, line, tally.add(0, pieces), lines) {
                    return Some(ratio);
                }
            }
        }
        None
    }

    // The remainder must equal a Sort 2 candidate exactly, not within TOLERANCE.
    fn residual_split(&self, index: usize, length: f64, tally: Tally, lines: &mut Vec<CutLine>) -> Option<Ratio> {
        for &s1 in &self.candidates.sort1 {
            if length <= s1 {
                continue;
            }
            let remaining = length - s1;
            if self.candidates.sort2.contains(&remaining) {
                let line = CutLine::new(length, vec![Segment::sort1(1, s1), Segment::sort2(1, remaining)]);
                if let Some(ratio) = self.descend(index, line, tally.add(1, 1), lines) {
                    return Some(ratio);
                }
            }
        }
        None
    }
}

/// Whole pieces of `piece` in `length`, or `None` above [`MAX_PIECES`]
fn piece_count(length: f64, piece: f64) -> Option<u64> {
    let pieces = (length / piece).round();
    if pieces > MAX_PIECES as f64 {
        debug!(length, piece, "piece_count: too many pieces");
        return None;
    }
    Some(pieces as u64)
}
