/// Split raw text into word-level tokens
///
/// A token is a maximal run of alphabetic characters, a maximal run of
/// ASCII digits, or a single punctuation mark; whitespace only separates.
/// Contractions split at the apostrophe ("don't" -> "don", "'", "t"),
/// which the stopword list accounts for by carrying the fragments.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut run_start: Option<(usize, CharClass)> = None;

    for (idx, ch) in text.char_indices() {
        let class = CharClass::of(ch);

        if let Some((start, open)) = run_start {
            if open == class && class.runs() {
                continue;
            }
            tokens.push(&text[start..idx]);
            run_start = None;
        }

        match class {
            CharClass::Whitespace => {}
            CharClass::Punctuation => tokens.push(&text[idx..idx + ch.len_utf8()]),
            _ => run_start = Some((idx, class)),
        }
    }

    if let Some((start, _)) = run_start {
        tokens.push(&text[start..]);
    }

    tokens
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Alphabetic,
    Digit,
    Punctuation,
    Whitespace,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_whitespace() {
            CharClass::Whitespace
        } else if ch.is_alphabetic() {
            CharClass::Alphabetic
        } else if ch.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Punctuation
        }
    }

    /// Whether consecutive characters of this class merge into one token
    fn runs(self) -> bool {
        matches!(self, CharClass::Alphabetic | CharClass::Digit)
    }
}
