//! Target ratios between Sort 1 and Sort 2 segment counts

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ratios a plan may reduce to, in trial order
pub const ALLOWED_RATIOS: [Ratio; 3] = [Ratio::new(2, 1), Ratio::new(5, 2), Ratio::new(3, 2)];

/// Sort 1 : Sort 2 segment count ratio
///
/// Serialized as its `"a:b"` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ratio {
    pub sort1: u64,
    pub sort2: u64,
}

impl Ratio {
    pub const fn new(sort1: u64, sort2: u64) -> Self {
        Self { sort1, sort2 }
    }

    /// Reduce segment counts to lowest terms
    ///
    /// Counts are scaled by 10 before taking the gcd. Returns `None` when both
    /// counts are zero or scaling overflows.
    pub fn reduce(sort1_count: u64, sort2_count: u64) -> Option<Self> {
        debug!(sort1_count, sort2_count, "Ratio::reduce: called");
        let scaled1 = sort1_count.checked_mul(10)?;
        let scaled2 = sort2_count.checked_mul(10)?;
        let divisor = gcd(scaled1, scaled2);
        if divisor == 0 {
            debug!("Ratio::reduce: zero counts");
            return None;
        }
        Some(Self::new(scaled1 / divisor, scaled2 / divisor))
    }

    /// Whether this ratio is one of [`ALLOWED_RATIOS`]
    pub fn is_allowed(&self) -> bool {
        ALLOWED_RATIOS.contains(self)
    }
}

/// Greatest common divisor; `gcd(0, 0) == 0`
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.sort1, self.sort2)
    }
}

impl std::str::FromStr for Ratio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid ratio: {} (expected a:b)", s))?;
        let sort1 = left
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("Invalid ratio {}: {}", s, e))?;
        let sort2 = right
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("Invalid ratio {}: {}", s, e))?;
        Ok(Self::new(sort1, sort2))
    }
}

impl TryFrom<String> for Ratio {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ratio> for String {
    fn from(ratio: Ratio) -> Self {
        ratio.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(40, 20), 20);
        assert_eq!(gcd(30, 20), 10);
        assert_eq!(gcd(30, 0), 30);
        assert_eq!(gcd(0, 40), 40);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(Ratio::reduce(4, 2), Some(Ratio::new(2, 1)));
        assert_eq!(Ratio::reduce(5, 2), Some(Ratio::new(5, 2)));
        assert_eq!(Ratio::reduce(6, 4), Some(Ratio::new(3, 2)));
        assert_eq!(Ratio::reduce(2, 2), Some(Ratio::new(1, 1)));
        assert_eq!(Ratio::reduce(3, 0), Some(Ratio::new(1, 0)));
        assert_eq!(Ratio::reduce(0, 4), Some(Ratio::new(0, 1)));
        assert_eq!(Ratio::reduce(0, 0), None);
    }

    #[test]
    fn test_reduce_overflow() {
        assert_eq!(Ratio::reduce(u64::MAX, 1), None);
        assert_eq!(Ratio::reduce(2, u64::MAX / 5), None);
        assert_eq!(Ratio::reduce(u64::MAX / 10, u64::MAX / 10), Some(Ratio::new(1, 1)));
    }

    #[test]
    fn test_is_allowed() {
        assert!(Ratio::new(2, 1).is_allowed());
        assert!(Ratio::new(5, 2).is_allowed());
        assert!(Ratio::new(3, 2).is_allowed());
        assert!(!Ratio::new(1, 1).is_allowed());
        assert!(!Ratio::new(4, 2).is_allowed());
        assert!(!Ratio::new(1, 0).is_allowed());
    }

    #[test]
    fn test_trial_order() {
        let texts: Vec<String> = ALLOWED_RATIOS.iter().map(|r| r.to_string()).collect();
        assert_eq!(texts, vec!["2:1", "5:2", "3:2"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("5:2".parse::<Ratio>().unwrap(), Ratio::new(5, 2));
        assert_eq!(" 3 : 2 ".trim().parse::<Ratio>().unwrap(), Ratio::new(3, 2));
        assert!("5-2".parse::<Ratio>().is_err());
        assert!("a:2".parse::<Ratio>().is_err());
    }

    #[test]
    fn test_ratio_serde() {
        let json = serde_json::to_string(&Ratio::new(2, 1)).unwrap();
        assert_eq!(json, "\"2:1\"");

        let ratio: Ratio = serde_json::from_str("\"3:2\"").unwrap();
        assert_eq!(ratio, Ratio::new(3, 2));
        assert!(serde_json::from_str::<Ratio>("\"32\"").is_err());
    }
}
