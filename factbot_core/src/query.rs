//! Turning a raw input line into query tokens.

/// Sentence punctuation dropped from queries. Hyphens and apostrophes stay
/// so that names like "guinea-bissau" or "cote d'ivoire" survive.
const STRIPPED: &[char] = &['?', '!', '.', ',', ';', ':', '"', '\u{201c}', '\u{201d}'];

/// Lowercase `line`, drop sentence punctuation and split on whitespace.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    line.to_lowercase()
        .replace(STRIPPED, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_question_mark() {
        assert_eq!(
            tokenize("What is the capital of France?"),
            ["what", "is", "the", "capital", "of", "france"]
        );
    }

    #[test]
    fn keeps_hyphens_and_apostrophes() {
        assert_eq!(
            tokenize("what is the capital of Cote d'Ivoire?"),
            ["what", "is", "the", "capital", "of", "cote", "d'ivoire"]
        );
        assert_eq!(tokenize("Guinea-Bissau"), ["guinea-bissau"]);
    }

    #[test]
    fn punctuation_never_glues_words() {
        assert_eq!(tokenize("bye!"), ["bye"]);
        assert_eq!(tokenize("korea,south"), ["korea", "south"]);
    }

    #[test]
    fn blank_line_has_no_tokens() {
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize("?").is_empty());
    }
}
