//! Scoring module - line clear rewards
//!
//! One fixed table, no level multiplier and no combo or drop points:
//! a single line is worth 100, two 300, three 500, four 800.

use crate::types::LINE_SCORES;

/// Points awarded for clearing `lines` rows with a single lock.
/// Any count outside 1..=4 scores nothing.
pub fn score_for(lines: usize) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        let got: Vec<u32> = (0..=5).map(score_for).collect();
        assert_eq!(got, vec![0, 100, 300, 500, 800, 0]);
    }

    #[test]
    fn test_large_counts_score_nothing() {
        assert_eq!(score_for(20), 0);
        assert_eq!(score_for(usize::MAX), 0);
    }
}
