use rapidfuzz::distance::indel;

use super::parser::PATTERNS;

/// Default minimum score for show and movie titles
pub const TITLE_THRESHOLD: f64 = 80.0;
/// Default minimum score for episode titles, which are shorter and noisier
pub const EPISODE_THRESHOLD: f64 = 70.0;

/// A candidate that cleared the threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    /// Position in the candidate list
    pub index: usize,
    /// Similarity score (0-100)
    pub score: f64,
}

/// Token-order-insensitive fuzzy matcher
pub struct FuzzyMatcher;

impl FuzzyMatcher {
    /// Similarity of two strings on a 0-100 scale.
    ///
    /// Both sides are lowercased, stripped of apostrophes, split into word
    /// tokens and re-joined in sorted order. The score is the Indel ratio
    /// `(len_a + len_b - indel) / (len_a + len_b)`, so an extra word on one
    /// side costs only its own length.
    #[must_use]
    pub fn score(query: &str, candidate: &str) -> f64 {
        let a = Self::sorted_tokens(query);
        let b = Self::sorted_tokens(candidate);

        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let total = a.chars().count() + b.chars().count();
        let distance = indel::distance(a.chars(), b.chars());

        (total - distance) as f64 * 100.0 / total as f64
    }

    /// Best candidate scoring at least `threshold`.
    ///
    /// Equal scores resolve to the earliest candidate in list order. An empty
    /// list never matches.
    #[must_use]
    pub fn best_match<S: AsRef<str>>(
        query: &str,
        candidates: &[S],
        threshold: f64,
    ) -> Option<ScoredCandidate> {
        let mut best: Option<ScoredCandidate> = None;

        for (index, candidate) in candidates.iter().enumerate() {
            let score = Self::score(query, candidate.as_ref());
            if best.is_none_or(|b| score > b.score) {
                best = Some(ScoredCandidate { index, score });
            }
        }

        best.filter(|b| b.score >= threshold)
    }

    fn sorted_tokens(text: &str) -> String {
        let lower = text.to_lowercase().replace(['\'', '\u{2019}'], "");
        let mut tokens: Vec<&str> = PATTERNS
            .non_word
            .split(&lower)
            .filter(|t| !t.is_empty())
            .collect();
        tokens.sort_unstable();
        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ignores_order_case_and_punctuation() {
        assert!((FuzzyMatcher::score("laboratory dexters", "Dexter's Laboratory") - 100.0).abs() < 0.01);
        assert!((FuzzyMatcher::score("the.office", "The Office") - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_extra_word_costs_only_its_length() {
        assert_eq!(FuzzyMatcher::score("doctor who 2005", "Doctor Who"), 80.0);
        assert!(FuzzyMatcher::best_match("doctor who 2005", &["Doctor Who"], TITLE_THRESHOLD).is_some());
        assert_eq!(FuzzyMatcher::score("abc", "abcd"), 600.0 / 7.0);
    }

    #[test]
    fn test_score_of_unrelated_titles_is_low() {
        assert!(FuzzyMatcher::score("breaking bad", "the sopranos") < 50.0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(FuzzyMatcher::score("", "Anything"), 0.0);
        assert_eq!(FuzzyMatcher::score("...", "Anything"), 0.0);
    }

    #[test]
    fn test_best_match_empty_candidates() {
        let candidates: Vec<String> = Vec::new();
        assert!(FuzzyMatcher::best_match("anything", &candidates, 0.0).is_none());
    }

    #[test]
    fn test_best_match_respects_threshold() {
        let candidates = ["Completely Different", "Another Thing"];
        assert!(FuzzyMatcher::best_match("dexters laboratory", &candidates, TITLE_THRESHOLD).is_none());

        let candidates = ["Jeepers Creepers", "Dexter's Laboratory"];
        let best = FuzzyMatcher::best_match("dexters laboratory", &candidates, TITLE_THRESHOLD).unwrap();
        assert_eq!(best.index, 1);
        assert!(best.score >= TITLE_THRESHOLD);
    }

    #[test]
    fn test_best_match_never_below_threshold() {
        let candidates = ["Lost", "Lust", "List", "Last Man Standing"];
        for threshold in [0.0, 25.0, 50.0, 75.0, 100.0] {
            if let Some(best) = FuzzyMatcher::best_match("lost", &candidates, threshold) {
                assert!(best.score >= threshold);
            }
        }
    }

    #[test]
    fn test_ties_resolve_to_first_candidate() {
        let candidates = ["Sherwood", "sherwood", "Sherwood!"];
        let best = FuzzyMatcher::best_match("sherwood", &candidates, TITLE_THRESHOLD).unwrap();
        assert_eq!(best.index, 0);
    }

    #[test]
    fn test_best_match_is_idempotent() {
        let candidates = ["The Wire", "The Wired", "Wire in the Blood"];
        let first = FuzzyMatcher::best_match("the wire", &candidates, EPISODE_THRESHOLD);
        let second = FuzzyMatcher::best_match("the wire", &candidates, EPISODE_THRESHOLD);
        assert_eq!(first, second);
    }
}
