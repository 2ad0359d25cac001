use std::collections::HashMap;

use serde::Serialize;

/// Word occurrence counts for one speaker
///
/// Keys are tokens exactly as they appear in cleaned statements; no case
/// folding happens here (the cleaner already made the case decisions).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct WordFrequency {
    counts: HashMap<String, u64>,
}

impl WordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a word
    pub fn add(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }

    /// Occurrences of a word, zero if unseen
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (total tokens seen)
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The `n` most frequent words, highest count first
    ///
    /// Ties break alphabetically so the ranking is deterministic across
    /// runs; HashMap iteration order must not leak into output.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// All (word, count) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(words: &[&str]) -> WordFrequency {
        let mut f = WordFrequency::new();
        for w in words {
            f.add(w);
        }
        f
    }

    #[test]
    fn test_counting() {
        let f = freq(&["border", "economy", "border", "border"]);

        assert_eq!(f.count("border"), 3);
        assert_eq!(f.count("economy"), 1);
        assert_eq!(f.count("absent"), 0);
        assert_eq!(f.len(), 2);
        assert_eq!(f.total(), 4);
    }

    #[test]
    fn test_top_orders_by_count_then_word() {
        let f = freq(&["b", "b", "c", "a", "a", "d"]);

        // a and b tie at 2, c and d tie at 1; alphabetical within ties
        assert_eq!(f.top(3), vec![("a", 2), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_top_handles_short_maps() {
        let f = freq(&["only"]);

        assert_eq!(f.top(5), vec![("only", 1)]);
        assert!(WordFrequency::new().top(5).is_empty());
    }

    #[test]
    fn test_case_is_significant() {
        let f = freq(&["America", "america"]);

        assert_eq!(f.count("America"), 1);
        assert_eq!(f.count("america"), 1);
        assert_eq!(f.len(), 2);
    }
}
