//! Single-wildcard token pattern matching.
//!
//! A [`Pattern`] is a sequence of literal tokens optionally ending in one
//! wildcard. Matching is purely positional: literals must equal the input
//! token-for-token (case-insensitively) and the trailing wildcard captures
//! the whole, non-empty, remainder of the input.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

/// Marker used for the wildcard in pattern templates.
pub const WILDCARD: &str = "%";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Lowercased literal word.
    Literal(String),
    Wildcard,
}

impl Token {
    #[must_use]
    pub fn literal(word: &str) -> Self {
        Self::Literal(word.to_lowercase())
    }
}

/// Validated token pattern: at most one wildcard, and only in last position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn new(tokens: Vec<Token>) -> Result<Self, PatternError> {
        let wildcards: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| matches!(t, Token::Wildcard))
            .map(|(i, _)| i)
            .collect();

        match wildcards.as_slice() {
            [] => {}
            [position] if *position + 1 == tokens.len() => {}
            [position] => {
                return Err(PatternError::WildcardNotLast {
                    position: *position,
                    len: tokens.len(),
                });
            }
            many => return Err(PatternError::MultipleWildcards(many.len())),
        }

        Ok(Self { tokens })
    }

    /// Parse a whitespace-separated template where `%` is the wildcard.
    pub fn parse(template: &str) -> Result<Self, PatternError> {
        let tokens = template
            .split_whitespace()
            .map(|word| {
                if word == WILDCARD {
                    Token::Wildcard
                } else {
                    Token::literal(word)
                }
            })
            .collect();
        Self::new(tokens)
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        matches!(self.tokens.last(), Some(Token::Wildcard))
    }

    /// Match `input` against this pattern, returning the captured tokens.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, input: &[S]) -> Option<Vec<String>> {
        match_tokens(&self.tokens, input)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<&str> = self
            .tokens
            .iter()
            .map(|t| match t {
                Token::Literal(word) => word.as_str(),
                Token::Wildcard => WILDCARD,
            })
            .collect();
        f.write_str(&words.join(" "))
    }
}

/// Match `input` against a raw token sequence.
///
/// - empty pattern: matches only empty input, capturing nothing;
/// - wildcard: must be the last pattern token and captures the remaining
///   input, which must be non-empty;
/// - literal: must equal the next input token ignoring case.
#[must_use]
pub fn match_tokens<S: AsRef<str>>(pattern: &[Token], input: &[S]) -> Option<Vec<String>> {
    match pattern.split_first() {
        None => input.is_empty().then(Vec::new),
        Some((Token::Wildcard, rest)) => {
            if !rest.is_empty() || input.is_empty() {
                return None;
            }
            Some(input.iter().map(|t| t.as_ref().to_string()).collect())
        }
        Some((Token::Literal(word), rest)) => {
            let (head, tail) = input.split_first()?;
            if head.as_ref().to_lowercase() != *word {
                return None;
            }
            match_tokens(rest, tail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(template: &str) -> Pattern {
        let Ok(p) = Pattern::parse(template) else {
            panic!("template {template:?} should parse");
        };
        p
    }

    fn words(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn empty_pattern_matches_only_empty_input() {
        let empty = pattern("");
        assert_eq!(empty.matches::<&str>(&[]), Some(vec![]));
        assert_eq!(empty.matches(&["x"]), None);
    }

    #[test]
    fn literal_pattern_requires_exact_sequence() {
        let p = pattern("what is this");
        assert_eq!(p.matches(&words("what is this")), Some(vec![]));
        assert_eq!(p.matches(&words("WHAT Is this")), Some(vec![]));
        assert_eq!(p.matches(&words("what is")), None);
        assert_eq!(p.matches(&words("what is this now")), None);
        assert_eq!(p.matches(&words("what was this")), None);
    }

    #[test]
    fn trailing_wildcard_captures_suffix() {
        let p = pattern("what is the capital of %");
        assert_eq!(
            p.matches(&words("what is the capital of france")),
            Some(vec!["france".to_string()])
        );
        assert_eq!(
            p.matches(&words("what is the capital of united kingdom")),
            Some(vec!["united".to_string(), "kingdom".to_string()])
        );
    }

    #[test]
    fn wildcard_requires_non_empty_capture() {
        let p = pattern("what is the capital of %");
        assert_eq!(p.matches(&words("what is the capital of")), None);
    }

    #[test]
    fn bare_wildcard_captures_everything() {
        let p = pattern("%");
        assert_eq!(
            p.matches(&words("anything at all")),
            Some(vec!["anything".into(), "at".into(), "all".into()])
        );
        assert_eq!(p.matches::<&str>(&[]), None);
    }

    #[test]
    fn captured_tokens_keep_input_case() {
        let p = pattern("capital of %");
        assert_eq!(
            p.matches(&words("Capital of New Zealand")),
            Some(vec!["New".to_string(), "Zealand".to_string()])
        );
    }

    #[test]
    fn literals_are_lowercased_at_construction() {
        let p = pattern("What IS %");
        assert_eq!(
            p.tokens(),
            &[Token::literal("what"), Token::literal("is"), Token::Wildcard]
        );
        assert_eq!(p.to_string(), "what is %");
        assert!(p.has_wildcard());
        assert!(!pattern("bye").has_wildcard());
    }

    #[test]
    fn rejects_wildcard_before_literal() {
        assert_eq!(
            Pattern::parse("capital of % please"),
            Err(PatternError::WildcardNotLast {
                position: 2,
                len: 4
            })
        );
    }

    #[test]
    fn rejects_multiple_wildcards() {
        assert_eq!(
            Pattern::parse("% and %"),
            Err(PatternError::MultipleWildcards(2))
        );
    }

    #[test]
    fn raw_matcher_refuses_inner_wildcard() {
        let tokens = [Token::Wildcard, Token::literal("x")];
        assert_eq!(match_tokens(&tokens, &["a", "x"]), None);
    }

    #[test]
    fn literal_only_patterns_match_iff_equal() {
        let cases = [
            ("bye", "bye", true),
            ("bye", "BYE", true),
            ("bye", "", false),
            ("bye", "bye bye", false),
            ("good bye", "good bye", true),
            ("good bye", "good day", false),
        ];
        for (template, input, expected) in cases {
            let result = pattern(template).matches(&words(input));
            assert_eq!(result.is_some(), expected, "{template:?} vs {input:?}");
            if let Some(captured) = result {
                assert!(captured.is_empty());
            }
        }
    }
}
