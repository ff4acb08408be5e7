//! Built-in rule handlers and the default rule table.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::PageResolver;
use crate::dispatch::{Handler, Outcome, Rule, RuleDispatcher};
use crate::error::{PatternError, QueryError};
use crate::extract::FactKind;
use crate::matcher::Pattern;
use crate::normalize::normalize;

/// Words that end the session.
pub const EXIT_WORDS: [&str; 3] = ["bye", "exit", "quit"];

/// Looks up one fact about the captured topic.
pub struct FactHandler {
    kind: FactKind,
    resolver: Arc<dyn PageResolver>,
}

impl FactHandler {
    #[must_use]
    pub fn new(kind: FactKind, resolver: Arc<dyn PageResolver>) -> Self {
        Self { kind, resolver }
    }

    #[must_use]
    pub const fn kind(&self) -> FactKind {
        self.kind
    }
}

#[async_trait]
impl Handler for FactHandler {
    async fn handle(&self, captured: &[String]) -> Result<Outcome, QueryError> {
        let topic = captured.join(" ");
        info!("Looking up {} of '{}'", self.kind, topic);

        let infobox = self.resolver.resolve_infobox(&topic).await?;
        debug!("Infobox for '{}': {} chars", topic, infobox.len());

        let value = self.kind.apply(&normalize(&infobox))?;
        Ok(Outcome::Answers(vec![value]))
    }
}

/// Signals the end of the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitHandler;

#[async_trait]
impl Handler for ExitHandler {
    async fn handle(&self, _captured: &[String]) -> Result<Outcome, QueryError> {
        Ok(Outcome::Exit)
    }
}

/// Lists the supported question forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpHandler;

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, _captured: &[String]) -> Result<Outcome, QueryError> {
        let mut lines = vec!["Questions I can answer:".to_string()];
        lines.extend(
            FactKind::ALL
                .iter()
                .map(|kind| format!("  {}", kind.question().replace('%', "<country>"))),
        );
        lines.push(format!("Say '{}' to leave.", EXIT_WORDS[0]));
        Ok(Outcome::Answers(lines))
    }
}

impl RuleDispatcher {
    /// Build the standard table: one rule per [`FactKind`], then the exit
    /// words, then `help`.
    pub fn with_default_rules(resolver: Arc<dyn PageResolver>) -> Result<Self, PatternError> {
        let mut dispatcher = Self::new();

        for kind in FactKind::ALL {
            dispatcher.add_rule(Rule::new(
                Pattern::parse(kind.question())?,
                Box::new(FactHandler::new(kind, Arc::clone(&resolver))),
            ));
        }
        for word in EXIT_WORDS {
            dispatcher.add_rule(Rule::new(Pattern::parse(word)?, Box::new(ExitHandler)));
        }
        dispatcher.add_rule(Rule::new(Pattern::parse("help")?, Box::new(HelpHandler)));

        Ok(dispatcher)
    }
}
