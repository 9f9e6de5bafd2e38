//! Coverage statistics.

use serde::{Deserialize, Serialize};

/// Coverage of the relevant vocabulary terms by one or more lexicons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    /// Relevant terms reached by at least one field.
    pub mapped: usize,
    /// Relevant terms.
    pub total: usize,
    /// `total - mapped`.
    pub missing: usize,
    /// `mapped / total * 100`, or `0` when there are no relevant terms.
    pub pct: f64,
}

impl ModelStats {
    /// Derive `missing` and `pct` from the two counts.
    pub fn from_counts(mapped: usize, total: usize) -> Self {
        debug_assert!(mapped <= total);
        let pct = if total > 0 {
            mapped as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            mapped,
            total,
            missing: total - mapped,
            pct,
        }
    }
}

/// Coverage across all lexicons, plus the summed field inventory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    #[serde(flatten)]
    pub stats: ModelStats,
    /// Sum of each lexicon's non-protocol field count. A field name shared
    /// by two lexicons is counted once per lexicon.
    pub total_fields: usize,
}

/// Render a percentage rounded to a whole number, e.g. `67%`.
///
/// Halves round away from zero.
pub fn format_pct(pct: f64) -> String {
    format!("{:.0}%", pct.round())
}
