use crate::models::WordFrequency;

/// Count word occurrences across one speaker's cleaned statements
///
/// Statements are whitespace-split and tokens counted by exact string
/// match; cleaning already removed punctuation, numerals, and stopwords.
/// No ranking or truncation happens here; callers apply
/// [`WordFrequency::top`] when they want a leaderboard.
pub fn analyze_statements(statements: &[String]) -> WordFrequency {
    let mut frequencies = WordFrequency::new();
    for statement in statements {
        for word in statement.split_whitespace() {
            frequencies.add(word);
        }
    }
    frequencies
}
