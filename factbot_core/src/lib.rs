#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;

pub mod dispatch;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod matcher;
pub mod normalize;
pub mod query;
pub mod repl;

pub use dispatch::{Dispatch, Handler, Outcome, Rule, RuleDispatcher};
pub use error::{PatternError, QueryError};
pub use extract::{FactKind, extract};
pub use handlers::{ExitHandler, FactHandler, HelpHandler};
pub use matcher::{Pattern, Token, match_tokens};
pub use normalize::normalize;
pub use query::tokenize;
pub use repl::{LoopState, QueryLoop};

/// Source of raw infobox text for a topic.
///
/// Implementations own all network and HTML concerns; the core only ever
/// sees the concatenated text of the first infobox on the topic's page.
#[async_trait]
pub trait PageResolver: Send + Sync {
    /// Returns the text of the first infobox-like section for `topic`.
    ///
    /// Fails with [`QueryError::NotFound`] when the topic has no page or the
    /// page has no infobox.
    async fn resolve_infobox(&self, topic: &str) -> Result<String, QueryError>;
}
