//! Detection of consecutive position runs inside an index set.

use std::ops::Range;

/// Finds every maximal run of at least two consecutive integers in a strictly
/// increasing index set.
///
/// Returned ranges address positions *within* `indices` (so `r.len()` is the
/// run length and `&indices[r]` the run itself). Single left-to-right scan.
pub fn consecutive_runs(indices: &[usize]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut run_start = 0;
    for i in 1..=indices.len() {
        let sequential = i < indices.len() && indices[i] == indices[i - 1] + 1;
        if !sequential {
            if i - run_start >= 2 {
                runs.push(run_start..i);
            }
            run_start = i;
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case(&[], vec![])]
    #[case(&[7], vec![])]
    #[case(&[1, 3, 5], vec![])]
    #[case(&[1, 2], vec![0..2])]
    #[case(&[0, 1, 2, 3], vec![0..4])]
    #[case(&[1, 2, 4, 5, 6], vec![0..2, 2..5])]
    #[case(&[0, 2, 3, 9], vec![1..3])]
    #[case(&[4, 5, 7, 9, 10], vec![0..2, 3..5])]
    fn finds_maximal_runs(#[case] indices: &[usize], #[case] expected: Vec<Range<usize>>) {
        check!(consecutive_runs(indices) == expected);
    }

    #[test]
    fn run_ranges_index_back_into_the_set() {
        let indices = [3, 4, 5, 8, 10, 11];
        let runs = consecutive_runs(&indices);
        check!(&indices[runs[0].clone()] == &[3, 4, 5]);
        check!(&indices[runs[1].clone()] == &[10, 11]);
    }
}
