//! Cross-tabulation of problem records.
//!
//! Builds two views of the same frequency table: difficulty keyed by type,
//! and type keyed by difficulty, each with an `ALL` total column. Both views
//! are kept so a consumer can look up either axis in O(1).

use super::categories::{Difficulty, ProblemType, TOTAL_KEY};
use crate::utils::error::StatsError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One problem entry from the remote payload
///
/// Extra payload fields (e.g. `pid`) are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemRecord {
    /// Source tag, one of the fixed [`ProblemType`] labels
    #[serde(rename = "type")]
    pub kind: String,

    /// Raw difficulty level, expected in `0..=7`
    pub difficulty: i64,
}

/// Matrix rows keyed by category label
pub type CountRow = BTreeMap<String, u64>;

/// Cross-tabulated counts for one problem list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemStats {
    /// `difficulty -> (type -> count)`, with an `ALL` total per difficulty
    pub difficulty_type: BTreeMap<String, CountRow>,

    /// `type -> (difficulty -> count)`, with an `ALL` total per type
    pub type_difficulty: BTreeMap<String, CountRow>,

    /// Total number of input records
    pub count: u64,
}

impl ProblemStats {
    /// Build the all-zero table: every cell exists up front, so later
    /// lookups never depend on implicit key creation.
    fn zeroed() -> Self {
        let mut difficulty_type = BTreeMap::new();
        for d in Difficulty::all() {
            let mut row: CountRow = ProblemType::ALL
                .iter()
                .map(|t| (t.label().to_string(), 0))
                .collect();
            row.insert(TOTAL_KEY.to_string(), 0);
            difficulty_type.insert(d.label().to_string(), row);
        }

        let mut type_difficulty = BTreeMap::new();
        for t in ProblemType::ALL {
            let mut row: CountRow = Difficulty::all()
                .map(|d| (d.label().to_string(), 0))
                .collect();
            row.insert(TOTAL_KEY.to_string(), 0);
            type_difficulty.insert(t.label().to_string(), row);
        }

        ProblemStats {
            difficulty_type,
            type_difficulty,
            count: 0,
        }
    }
}

/// Cross-tabulate a problem list
///
/// **Public** - main entry point for statistics building
///
/// Deterministic and order-independent: the result depends only on the
/// multiset of records. An empty list yields all-zero matrices and
/// `count == 0`.
///
/// # Errors
/// `StatsError::UnknownType` / `StatsError::UnknownDifficulty` if any record
/// falls outside the fixed enumerations. The whole aggregation fails rather
/// than dropping the record, so `count` always equals the sum of the cells.
pub fn aggregate(records: &[ProblemRecord]) -> Result<ProblemStats, StatsError> {
    let mut stats = ProblemStats::zeroed();

    for record in records {
        let kind = ProblemType::parse(&record.kind)?;
        let difficulty = Difficulty::new(record.difficulty)?;

        bump(&mut stats.difficulty_type, difficulty.label(), kind.label());
        bump(&mut stats.difficulty_type, difficulty.label(), TOTAL_KEY);
        bump(&mut stats.type_difficulty, kind.label(), difficulty.label());
        bump(&mut stats.type_difficulty, kind.label(), TOTAL_KEY);
    }

    stats.count = records.len() as u64;

    debug!("Aggregated {} problem records", stats.count);

    Ok(stats)
}

/// Increment one cell. Rows are fully seeded in `zeroed()`, so the lookup
/// cannot miss for validated categories.
fn bump(matrix: &mut BTreeMap<String, CountRow>, row: &str, col: &str) {
    if let Some(cell) = matrix.get_mut(row).and_then(|r| r.get_mut(col)) {
        *cell += 1;
    }
}
