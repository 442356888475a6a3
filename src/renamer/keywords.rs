use std::collections::HashSet;

use super::parser::PATTERNS;

/// Words dropped from search queries unless configured otherwise
pub const DEFAULT_STOPWORDS: &[&str] = &["the", "and", "of", "a", "to", "in", "on", "at", "for"];

/// Splits free text into lowercase keywords with stopwords removed
#[derive(Debug, Clone)]
pub struct KeywordNormalizer {
    stopwords: HashSet<String>,
}

impl KeywordNormalizer {
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Ordered keywords of `text`; non-word characters act as separators
    #[must_use]
    pub fn keywords(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        PATTERNS
            .non_word
            .split(&lower)
            .filter(|w| !w.is_empty() && !self.stopwords.contains(*w))
            .map(str::to_string)
            .collect()
    }

    /// Keywords joined by single spaces, the form sent to the catalog
    #[must_use]
    pub fn query(&self, text: &str) -> String {
        self.keywords(text).join(" ")
    }
}

impl Default for KeywordNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_drop_stopwords_and_separators() {
        let normalizer = KeywordNormalizer::default();
        assert_eq!(
            normalizer.keywords("The.Lord.of.the_Rings - Return"),
            vec!["lord", "rings", "return"]
        );
    }

    #[test]
    fn test_stopwords_are_case_insensitive() {
        let normalizer = KeywordNormalizer::new(["AND"]);
        assert_eq!(normalizer.query("Law And Order"), "law order");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        let normalizer = KeywordNormalizer::default();
        assert!(normalizer.keywords("").is_empty());
        assert!(normalizer.keywords("...___ - ").is_empty());
    }

    #[test]
    fn test_query_for_title_hint() {
        let normalizer = KeywordNormalizer::default();
        assert_eq!(normalizer.query("Dexters.Laboratory"), "dexters laboratory");
    }
}
