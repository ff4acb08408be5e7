//! Infobox location inside rendered page HTML.

use factbot_core::QueryError;
use scraper::{ElementRef, Html, Selector};

const INFOBOX_SELECTOR: &str = ".infobox";

/// Elements whose text is never part of the visible infobox.
const SKIPPED: [&str; 2] = ["style", "script"];

/// Return the text of the first element carrying the `infobox` class.
///
/// Text nodes are concatenated in document order without separators, so
/// the result keeps the page's own line breaks and spacing.
pub fn first_infobox_text(html: &str) -> Result<String, QueryError> {
    let Ok(selector) = Selector::parse(INFOBOX_SELECTOR) else {
        return Err(QueryError::NotFound("Page has no infobox".to_string()));
    };

    let document = Html::parse_document(html);
    document
        .select(&selector)
        .next()
        .map(|infobox| visible_text(&infobox))
        .ok_or_else(|| QueryError::NotFound("Page has no infobox".to_string()))
}

fn visible_text(element: &ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in element.descendants() {
        let Some(chunk) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED.contains(&el.name()))
        });
        if !hidden {
            text.push_str(chunk);
        }
    }
    text
}
