//! Fuzzy subsequence matching, scoring and ranking.
//!
//! The engine enumerates every case-insensitive in-order alignment of the
//! query against each candidate's combined text, scores each alignment, keeps
//! the best one per candidate and produces the sorted display set. It runs
//! synchronously on every keystroke.

// Module declarations
pub(crate) mod enumerate;
pub(crate) mod rank;
pub(crate) mod runs;
pub(crate) mod scoring;

// Public re-exports (used via lib.rs)
pub use enumerate::index_sets;
pub use rank::{DISPLAY_LINE_COUNT, RankedEntry, Ranking};
pub use runs::consecutive_runs;
pub use scoring::score_index_set;
