//! Regex-driven fact extraction from normalized infobox text.
//!
//! Infobox markup is irregular, so each fact is located with a tolerant,
//! bounded pattern and a fact-specific error message is reported when the
//! label is missing.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::QueryError;

const CAPITAL_PATTERN: &str = r"(?is)(?:capital[^\w]*[:|]?[^\w]*)(?P<capital>[A-Za-z\s]+)";
const POPULATION_PATTERN: &str = r"(?is)Population(?:[^0-9]{0,20})?.*?(?P<pop>[0-9][0-9, ]{6,})";
const LANGUAGE_PATTERN: &str =
    r"(?is)Official languages?[\s]?(?:\(.*?\))?\s*(?P<lang>[A-Za-z, \[\]]+)";

/// Phrase some infoboxes put next to the capital when it is also the
/// largest city.
const LARGEST_CITY: &str = "and largest city";

static CAPITAL: OnceLock<Regex> = OnceLock::new();
static POPULATION: OnceLock<Regex> = OnceLock::new();
static LANGUAGE: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern).expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Apply `pattern` to `text` and return its named capture.
///
/// The first named group of `pattern` is returned untrimmed; a pattern
/// without named groups yields the whole match. Fails with
/// [`QueryError::Extraction`] carrying `error_message` when nothing matches.
pub fn extract(text: &str, pattern: &Regex, error_message: &str) -> Result<String, QueryError> {
    let caps = pattern
        .captures(text)
        .ok_or_else(|| QueryError::Extraction(error_message.to_string()))?;

    let group = pattern
        .capture_names()
        .flatten()
        .next()
        .and_then(|name| caps.name(name))
        .or_else(|| caps.get(0))
        .ok_or_else(|| QueryError::Extraction(error_message.to_string()))?;

    Ok(group.as_str().to_string())
}

/// A fact that can be looked up in a country infobox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactKind {
    Capital,
    Population,
    OfficialLanguage,
}

impl FactKind {
    pub const ALL: [Self; 3] = [Self::Capital, Self::Population, Self::OfficialLanguage];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Capital => "capital",
            Self::Population => "population",
            Self::OfficialLanguage => "official language",
        }
    }

    /// Compiled extraction pattern, built once per process.
    #[must_use]
    pub fn pattern(&self) -> &'static Regex {
        match self {
            Self::Capital => compiled(&CAPITAL, CAPITAL_PATTERN),
            Self::Population => compiled(&POPULATION, POPULATION_PATTERN),
            Self::OfficialLanguage => compiled(&LANGUAGE, LANGUAGE_PATTERN),
        }
    }

    #[must_use]
    pub const fn error_message(&self) -> &'static str {
        match self {
            Self::Capital => "Page infobox has no capital city information",
            Self::Population => "Page infobox has no population information",
            Self::OfficialLanguage => "Page infobox has no official language information",
        }
    }

    /// Question template answered by this fact, `%` marking the topic.
    #[must_use]
    pub const fn question(&self) -> &'static str {
        match self {
            Self::Capital => "what is the capital of %",
            Self::Population => "what is the population of %",
            Self::OfficialLanguage => "what is the official language of %",
        }
    }

    /// Extract this fact from already-normalized infobox text.
    pub fn apply(&self, text: &str) -> Result<String, QueryError> {
        let raw = extract(text, self.pattern(), self.error_message())?;
        let value = self.post_process(raw.trim());
        if value.is_empty() {
            return Err(QueryError::Extraction(self.error_message().to_string()));
        }
        debug!("Extracted {}: {:?}", self.as_str(), value);
        Ok(value)
    }

    fn post_process(&self, value: &str) -> String {
        match self {
            Self::Capital if value.contains(LARGEST_CITY) => {
                value.replace(LARGEST_CITY, "").trim().to_string()
            }
            _ => value.to_string(),
        }
    }
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
