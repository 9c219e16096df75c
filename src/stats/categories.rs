//! Fixed category enumerations for problem records.
//!
//! The remote site tags every problem with a source prefix and a
//! difficulty level. Both sets are closed; anything outside them is
//! rejected rather than silently dropped, so the matrix totals always
//! match the record count.

use crate::utils::error::StatsError;

/// Label of the total row/column present in every matrix
pub const TOTAL_KEY: &str = "ALL";

/// Problem source, by its problem-id prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemType {
    /// Mainline Luogu problems (`P`)
    Mainline,
    /// Beginner problems (`B`)
    Beginner,
    /// Codeforces mirror (`CF`)
    Codeforces,
    /// SPOJ mirror (`SP`)
    Spoj,
    /// AtCoder mirror (`AT`)
    AtCoder,
    /// UVa mirror (`UVA`)
    Uva,
}

impl ProblemType {
    /// All types, in the site's display order
    pub const ALL: [ProblemType; 6] = [
        ProblemType::Mainline,
        ProblemType::Beginner,
        ProblemType::Codeforces,
        ProblemType::Spoj,
        ProblemType::AtCoder,
        ProblemType::Uva,
    ];

    /// The tag used as a key in the remote payload and in our matrices
    pub fn label(self) -> &'static str {
        match self {
            ProblemType::Mainline => "P",
            ProblemType::Beginner => "B",
            ProblemType::Codeforces => "CF",
            ProblemType::Spoj => "SP",
            ProblemType::AtCoder => "AT",
            ProblemType::Uva => "UVA",
        }
    }

    /// Parse a payload tag, rejecting anything outside the fixed set
    pub fn parse(tag: &str) -> Result<Self, StatsError> {
        match tag {
            "P" => Ok(ProblemType::Mainline),
            "B" => Ok(ProblemType::Beginner),
            "CF" => Ok(ProblemType::Codeforces),
            "SP" => Ok(ProblemType::Spoj),
            "AT" => Ok(ProblemType::AtCoder),
            "UVA" => Ok(ProblemType::Uva),
            other => Err(StatsError::UnknownType(other.to_string())),
        }
    }
}

/// Difficulty level, `0` (unrated) through `7` (hardest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Difficulty(u8);

const DIFFICULTY_LABELS: [&str; 8] = ["0", "1", "2", "3", "4", "5", "6", "7"];

impl Difficulty {
    /// Validate a raw payload value against the fixed range
    pub fn new(raw: i64) -> Result<Self, StatsError> {
        if (0..=7).contains(&raw) {
            Ok(Difficulty(raw as u8))
        } else {
            Err(StatsError::UnknownDifficulty(raw))
        }
    }

    /// The string key used in the matrices ("0".."7")
    pub fn label(self) -> &'static str {
        DIFFICULTY_LABELS[self.0 as usize]
    }

    /// All levels in ascending order
    pub fn all() -> impl Iterator<Item = Difficulty> {
        (0..8u8).map(Difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_labels_round_trip() {
        for t in ProblemType::ALL {
            assert_eq!(ProblemType::parse(t.label()).unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(matches!(
            ProblemType::parse("XYZ"),
            Err(StatsError::UnknownType(_))
        ));
        // case sensitive, same as the site's tags
        assert!(ProblemType::parse("p").is_err());
    }

    #[test]
    fn test_difficulty_range() {
        assert_eq!(Difficulty::new(0).unwrap().label(), "0");
        assert_eq!(Difficulty::new(7).unwrap().label(), "7");
        assert!(matches!(
            Difficulty::new(8),
            Err(StatsError::UnknownDifficulty(8))
        ));
        assert!(Difficulty::new(-1).is_err());
    }

    #[test]
    fn test_difficulty_all_covers_range() {
        let labels: Vec<&str> = Difficulty::all().map(|d| d.label()).collect();
        assert_eq!(labels, DIFFICULTY_LABELS);
    }
}
