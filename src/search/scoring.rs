//! Alignment scoring.
//!
//! Scores one index set against an entry's combined text. Two signals feed
//! the score: *where* the matched characters fall (the executable-name region
//! outweighs the title region) and *how contiguous* they are (consecutive
//! positions indicate the user typed a real substring rather than scattered
//! initials).

use super::runs::consecutive_runs;

/// Weight for each matched character inside the executable-name region.
/// The file name is the more stable, more intentional identifier.
const NAME_WEIGHT: f32 = 2.5;

/// Weight for each matched character inside the title region.
const TITLE_WEIGHT: i32 = 1;

/// Bonus multiplier per character of a consecutive run.
const RUN_MULTIPLIER: f32 = 1.5;

/// Penalty per query character left unmatched.
const UNMATCHED_PENALTY: i32 = 5;

/// Scores one alignment of a query against an entry's combined text.
///
/// `query_len` is the query's character count, `indices` the alignment, and
/// `split_point` the boundary after which positions belong to the window
/// title rather than the executable name.
///
/// The unmatched-character penalty is structurally inert today: the
/// enumerator only ever produces full-length alignments, so
/// `query_len == indices.len()` and the term is zero. It stays in the formula
/// to support a future partial-credit matching mode.
pub fn score_index_set(query_len: usize, indices: &[usize], split_point: usize) -> i32 {
    let before_count = indices.iter().filter(|&&pos| pos <= split_point).count() as i32;
    let after_count = indices.len() as i32 - before_count;
    let penalty = (query_len as i32 - indices.len() as i32) * UNMATCHED_PENALTY;
    let run_bonus: i32 = consecutive_runs(indices)
        .iter()
        .map(|run| (run.len() as f32 * RUN_MULTIPLIER) as i32)
        .sum();
    run_bonus + (before_count as f32 * NAME_WEIGHT) as i32 + after_count * TITLE_WEIGHT - penalty
}
