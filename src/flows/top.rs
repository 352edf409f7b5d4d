//! Top-K selection over a tally

use crate::core::model::CountEntry;
use crate::flows::tally::Tally;

/// Number of authors the CLI reports by default
pub const DEFAULT_TOP: usize = 10;

/// Return the `k` entries with the highest counts, highest first.
///
/// Ties keep the order in which authors were first seen in the file.
pub fn top_k(tally: &Tally, k: usize) -> Vec<CountEntry> {
    let mut ranked = tally.entries().to_vec();
    // stable: equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(k);
    ranked
}
