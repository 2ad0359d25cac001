use std::collections::HashSet;

/// Standard English stopword list (NLTK's), including the contraction
/// fragments ("s", "t", "don", "shouldn") the tokenizer produces when it
/// splits at apostrophes.
pub const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// A stopword set with case-insensitive membership
///
/// Words are stored lowercase; probes are lowercased before lookup, so
/// "The", "THE", and "the" are all members once "the" is in the set.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The standard English list alone
    pub fn english() -> Self {
        Self {
            words: ENGLISH.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// The standard English list unioned with caller-supplied custom words
    pub fn english_with<I, S>(custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::english();
        set.extend(custom);
        set
    }

    /// An empty set, for callers that want no filtering
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Add custom words to the set
    pub fn extend<I, S>(&mut self, custom: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(custom.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of distinct stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_case_insensitive() {
        let set = StopwordSet::english();

        assert!(set.contains("the"));
        assert!(set.contains("The"));
        assert!(set.contains("THE"));
        assert!(!set.contains("border"));
    }

    #[test]
    fn test_contraction_fragments_present() {
        let set = StopwordSet::english();

        assert!(set.contains("s"));
        assert!(set.contains("t"));
        assert!(set.contains("don"));
        assert!(set.contains("shouldn"));
    }

    #[test]
    fn test_custom_words_union() {
        let set = StopwordSet::english_with(["President", "debate"]);

        assert!(set.contains("president"));
        assert!(set.contains("Debate"));
        assert!(set.contains("the"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = StopwordSet::none();

        assert!(set.is_empty());
        assert!(!set.contains("the"));
    }
}
