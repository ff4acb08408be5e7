//! Cleanup of scraped infobox text.

use std::sync::OnceLock;

use regex::Regex;

static SPACE_RUNS: OnceLock<Regex> = OnceLock::new();
static NEWLINE_RUNS: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn space_runs() -> &'static Regex {
    SPACE_RUNS.get_or_init(|| {
        Regex::new(r" {2,}").expect("Static regex pattern is guaranteed to be valid")
    })
}

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn newline_runs() -> &'static Regex {
    NEWLINE_RUNS.get_or_init(|| {
        Regex::new(r"\n{2,}").expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Characters kept as-is: printable ASCII plus the ASCII whitespace set
/// (space, tab, newline, carriage return, vertical tab, form feed).
const fn is_printable(c: char) -> bool {
    matches!(c, ' '..='~' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Normalize scraped text.
///
/// Every character outside printable ASCII becomes a single space, so that
/// tokens separated only by e.g. a non-breaking space do not merge. Runs of
/// spaces then collapse to one space and runs of newlines to one newline.
/// Total and idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    let ascii: String = text
        .chars()
        .map(|c| if is_printable(c) { c } else { ' ' })
        .collect();
    let spaced = space_runs().replace_all(&ascii, " ");
    newline_runs().replace_all(&spaced, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_spaces_and_newlines() {
        assert_eq!(normalize("a    b\n\n\nc"), "a b\nc");
    }

    #[test]
    fn replaces_non_ascii_with_space() {
        assert_eq!(normalize("Paris\u{a0}France"), "Paris France");
        assert_eq!(normalize("S\u{e3}o Paulo"), "S o Paulo");
    }

    #[test]
    fn non_ascii_next_to_space_collapses() {
        assert_eq!(normalize("Capital \u{2022} Paris"), "Capital Paris");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "",
            "plain",
            "  lead and trail  ",
            "Capital\n\n\n\u{a0}\u{a0} Paris\n\n48\u{b0}51\u{2032}N",
            "a \n \n b",
            "tabs\t\tstay",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn keeps_tabs_and_punctuation() {
        assert_eq!(normalize("a\tb: [c], (d)"), "a\tb: [c], (d)");
    }
}
