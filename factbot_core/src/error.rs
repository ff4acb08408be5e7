use thiserror::Error;

/// Per-query failure, reported to the user before the loop continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The topic has no retrievable page, or the page has no infobox.
    #[error("{0}")]
    NotFound(String),

    /// The infobox exists but the expected fact is absent from it.
    #[error("{0}")]
    Extraction(String),

    /// The page could not be fetched (transport, status or decoding failure).
    #[error("Failed to fetch page: {0}")]
    Fetch(String),
}

/// Rejected pattern template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern contains {0} wildcards, at most one is allowed")]
    MultipleWildcards(usize),

    #[error("wildcard must be the last token, found at position {position} of {len}")]
    WildcardNotLast { position: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_error_displays_message_verbatim() {
        let err = QueryError::Extraction("Page infobox has no capital city information".into());
        assert_eq!(
            err.to_string(),
            "Page infobox has no capital city information"
        );
    }

    #[test]
    fn fetch_error_is_prefixed() {
        let err = QueryError::Fetch("connection refused".into());
        assert_eq!(err.to_string(), "Failed to fetch page: connection refused");
    }
}
