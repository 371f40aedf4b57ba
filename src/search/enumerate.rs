//! Exhaustive subsequence alignment enumeration.

use crate::types::IndexSet;

/// Folds a character for case-insensitive comparison.
///
/// Simple one-to-one case folding: multi-character lowercase expansions keep
/// their first character. Window titles and executable names do not need
/// full Unicode case mapping.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Enumerates every way `query` appears, in order and case-insensitively, as
/// a subsequence of `text`.
///
/// For example, `"abcbc"` with query `"bc"` yields three index sets:
/// `[1,2]`, `[1,4]` and `[3,4]`.
///
/// Breadth-first frontier expansion: start from the single empty alignment
/// and, for each query character, extend every partial alignment by every
/// text position past its last chosen index that matches. Partial alignments
/// with no extension die off. An empty query yields exactly one empty
/// alignment; if the frontier empties out, there is no match at all.
///
/// Worst case the frontier grows exponentially when a character repeats in
/// both query and text. That is an accepted tradeoff: queries are typed
/// interactively (a dozen characters at most) and texts are window titles.
pub fn index_sets(text: &str, query: &str) -> Vec<IndexSet> {
    let text: Vec<char> = text.chars().map(fold).collect();

    let mut frontier: Vec<IndexSet> = vec![Vec::new()];
    for query_char in query.chars().map(fold) {
        let mut extended = Vec::new();
        for partial in &frontier {
            let start = partial.last().map_or(0, |&last| last + 1);
            for (offset, &text_char) in text[start..].iter().enumerate() {
                if text_char == query_char {
                    let mut grown = partial.clone();
                    grown.push(start + offset);
                    extended.push(grown);
                }
            }
        }
        frontier = extended;
        if frontier.is_empty() {
            break;
        }
    }
    frontier
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[test]
    fn enumerates_every_alignment() {
        let sets = index_sets("abcbc", "bc");
        check!(sets == vec![vec![1, 2], vec![1, 4], vec![3, 4]]);
    }

    #[test]
    fn empty_query_yields_single_empty_alignment() {
        check!(index_sets("anything", "") == vec![Vec::<usize>::new()]);
        check!(index_sets("", "") == vec![Vec::<usize>::new()]);
    }

    #[test]
    fn no_match_yields_no_alignments() {
        check!(index_sets("chrome", "xyz").is_empty());
        check!(index_sets("", "a").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let sets = index_sets("Visual Studio Code", "VSC");
        check!(sets.contains(&vec![0, 7, 14]));
        check!(index_sets("CHROME", "chrome") == vec![vec![0, 1, 2, 3, 4, 5]]);
    }

    #[test]
    fn positions_are_never_reused() {
        // Single 'a' in the text cannot satisfy "aa".
        check!(index_sets("abc", "aa").is_empty());
    }

    #[rstest]
    #[case("chrome", "ch")]
    #[case("chrome", "ce")]
    #[case("abcbc", "bc")]
    #[case("code untitled - Visual Studio Code", "code")]
    #[case("aAbBaA", "aba")]
    fn alignments_are_strictly_increasing_and_full_length(
        #[case] text: &str,
        #[case] query: &str,
    ) {
        let folded: Vec<char> = text.chars().map(fold).collect();
        for set in index_sets(text, query) {
            check!(set.len() == query.chars().count());
            check!(set.windows(2).all(|w| w[0] < w[1]));
            for (pos, query_char) in set.iter().zip(query.chars().map(fold)) {
                check!(folded[*pos] == query_char);
            }
        }
    }
}
