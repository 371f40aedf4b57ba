//! Per-keystroke candidate ranking.

use crate::types::{Candidate, IndexSet, WindowHandle};

use super::enumerate::index_sets;
use super::scoring::score_index_set;

/// How many ranked entries the display (and the shortcut scan) covers.
pub const DISPLAY_LINE_COUNT: usize = 5;

/// One candidate that matched the query, with its best-scoring alignment.
#[derive(Debug, Clone)]
pub struct RankedEntry {
    /// Index into the candidate list the ranking was computed from.
    pub candidate: usize,
    /// The best-scoring index set for this candidate.
    pub indices: IndexSet,
    pub score: i32,
}

/// The display set for one query: candidates with score above zero, sorted by
/// descending score and truncated to [`DISPLAY_LINE_COUNT`].
///
/// Recomputed from scratch on every query change; nothing is cached across
/// keystrokes. The sort is stable, so candidates with equal scores keep their
/// snapshot order and the ranking is reproducible.
#[derive(Debug, Default)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
}

impl Ranking {
    /// Ranks `candidates` against `query`.
    ///
    /// Each candidate's score is the maximum over all of its alignments; ties
    /// between alignments resolve to the first one the enumerator produced.
    /// Candidates with no alignment, or whose best score is not positive, are
    /// dropped — in particular an empty query scores every candidate zero and
    /// produces an empty display set.
    pub fn rank(candidates: &[Candidate], query: &str) -> Self {
        let query_len = query.chars().count();
        let mut entries: Vec<RankedEntry> = candidates
            .iter()
            .enumerate()
            .filter_map(|(candidate, cand)| {
                let text = cand.entry.combined_text();
                let split_point = cand.entry.split_point();
                // First-encountered alignment wins score ties, keeping the
                // chosen highlight deterministic.
                let mut best: Option<(IndexSet, i32)> = None;
                for indices in index_sets(&text, query) {
                    let score = score_index_set(query_len, &indices, split_point);
                    if best.as_ref().is_none_or(|&(_, top)| score > top) {
                        best = Some((indices, score));
                    }
                }
                best.map(|(indices, score)| RankedEntry {
                    candidate,
                    indices,
                    score,
                })
            })
            .filter(|entry| entry.score > 0)
            .collect();

        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(DISPLAY_LINE_COUNT);
        Self { entries }
    }

    /// The displayed entries, best first.
    pub fn display(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Handle of the top-ranked entry — the target Enter activates.
    pub fn default_selection(&self, candidates: &[Candidate]) -> Option<WindowHandle> {
        self.entries
            .first()
            .map(|entry| candidates[entry.candidate].handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;
    use assert2::check;

    fn candidate(id: u64, file_name: &str, title: &str) -> Candidate {
        Candidate::new(WindowHandle(id), Entry::new(file_name, title))
    }

    #[test]
    fn empty_query_produces_empty_display_set() {
        let candidates = vec![candidate(1, "chrome", "Gmail"), candidate(2, "code", "src")];
        let ranking = Ranking::rank(&candidates, "");
        check!(ranking.display().is_empty());
        check!(ranking.default_selection(&candidates).is_none());
    }

    #[test]
    fn unmatched_candidates_are_excluded() {
        let candidates = vec![candidate(1, "chrome", "Gmail"), candidate(2, "code", "src")];
        let ranking = Ranking::rank(&candidates, "gmail");
        check!(ranking.display().len() == 1);
        check!(ranking.display()[0].candidate == 0);
    }

    #[test]
    fn best_alignment_is_kept_per_candidate() {
        let candidates = vec![candidate(1, "abcbc", "")];
        let ranking = Ranking::rank(&candidates, "bc");
        // [1,2] is contiguous and beats [1,4] and [3,4]... but [3,4] is also
        // contiguous with the same score, and the earlier alignment wins.
        check!(ranking.display()[0].indices == vec![1, 2]);
    }

    #[test]
    fn equal_scores_keep_snapshot_order() {
        let candidates = vec![
            candidate(1, "term", "one"),
            candidate(2, "term", "two"),
            candidate(3, "term", "three"),
        ];
        let ranking = Ranking::rank(&candidates, "term");
        let order: Vec<usize> = ranking.display().iter().map(|e| e.candidate).collect();
        check!(order == vec![0, 1, 2]);
    }

    #[test]
    fn display_set_is_truncated() {
        let candidates: Vec<Candidate> = (0..8)
            .map(|i| candidate(i, "shell", &format!("tab {i}")))
            .collect();
        let ranking = Ranking::rank(&candidates, "sh");
        check!(ranking.display().len() == DISPLAY_LINE_COUNT);
    }

    #[test]
    fn default_selection_is_the_top_entry() {
        let candidates = vec![
            candidate(7, "chrome", "Gmail - Inbox"),
            candidate(9, "code", "untitled - Visual Studio Code"),
        ];
        let ranking = Ranking::rank(&candidates, "cod");
        check!(ranking.default_selection(&candidates) == Some(WindowHandle(9)));
    }
}
