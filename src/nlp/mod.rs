//! Tokenization, stopword filtering, and text cleaning

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::*;
pub use tokenizer::*;

/// Clean raw text down to its content-bearing words
///
/// Tokenizes the input, keeps only tokens that are entirely alphabetic and
/// not in the stopword set (membership checked case-insensitively, original
/// case kept), and joins the survivors with single spaces. Punctuation,
/// numerals, and sentence boundaries are deliberately lost; downstream use
/// is frequency counting, not readability.
pub fn clean_text(text: &str, stopwords: &StopwordSet) -> String {
    let kept: Vec<&str> = tokenize(text)
        .into_iter()
        .filter(|token| token.chars().all(char::is_alphabetic))
        .filter(|token| !stopwords.contains(token))
        .collect();
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_stopwords() {
        let stopwords = StopwordSet::english();
        let cleaned = clean_text("Well, the economy is exploding!", &stopwords);

        assert_eq!(cleaned, "Well economy exploding");
    }

    #[test]
    fn test_keeps_original_case() {
        let stopwords = StopwordSet::english_with(["president"]);
        let cleaned = clean_text("President Biden and President Trump", &stopwords);

        assert_eq!(cleaned, "Biden Trump");
    }

    #[test]
    fn test_numerals_dropped() {
        let stopwords = StopwordSet::none();
        let cleaned = clean_text("insulin costs $35 not $400", &stopwords);

        assert_eq!(cleaned, "insulin costs");
    }

    #[test]
    fn test_contraction_fragments_filtered() {
        let stopwords = StopwordSet::english();
        // "don't" tokenizes to "don" / "'" / "t"; both fragments are stopwords
        let cleaned = clean_text("they don't negotiate", &stopwords);

        assert_eq!(cleaned, "negotiate");
    }

    #[test]
    fn test_empty_input() {
        let stopwords = StopwordSet::english();

        assert_eq!(clean_text("", &stopwords), "");
        assert_eq!(clean_text("   \n  ", &stopwords), "");
    }

    #[test]
    fn test_all_stopword_input_cleans_to_empty() {
        let stopwords = StopwordSet::english();

        assert_eq!(clean_text("the the the", &stopwords), "");
    }
}
