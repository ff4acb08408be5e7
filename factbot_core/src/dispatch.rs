//! Ordered (pattern, handler) rule table.

use async_trait::async_trait;
use tracing::debug;

use crate::error::QueryError;
use crate::matcher::Pattern;

/// Reply used when a matched handler produced no lines.
pub const NO_ANSWERS: &str = "No answers";

/// Reply used when no rule matches the query.
pub const NOT_UNDERSTOOD: &str = "I don't understand";

/// What a handler produced for a matched query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answers(Vec<String>),
    /// The user asked to end the session.
    Exit,
}

/// Result of dispatching one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Lines to show the user. Never empty.
    Reply(Vec<String>),
    /// Terminal control signal; the caller's loop should stop.
    Exit,
}

/// Computes the answer for a matched rule from the wildcard capture.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, captured: &[String]) -> Result<Outcome, QueryError>;
}

pub struct Rule {
    pattern: Pattern,
    handler: Box<dyn Handler>,
}

impl Rule {
    #[must_use]
    pub fn new(pattern: Pattern, handler: Box<dyn Handler>) -> Self {
        Self { pattern, handler }
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// Rule table consulted in insertion order; the first structural match wins.
///
/// The table is built once at startup and only read afterwards, so a single
/// instance can be shared by reference for the whole session.
pub struct RuleDispatcher {
    rules: Vec<Rule>,
}

impl RuleDispatcher {
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: Rule) {
        debug!("Registering rule: {}", rule.pattern);
        self.rules.push(rule);
    }

    #[must_use]
    pub fn with_rule(mut self, pattern: Pattern, handler: Box<dyn Handler>) -> Self {
        self.add_rule(Rule::new(pattern, handler));
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Answer a tokenized query.
    ///
    /// Handler failures are returned as-is; an unrecognized query is not an
    /// error and yields [`NOT_UNDERSTOOD`].
    pub async fn dispatch<S: AsRef<str> + Sync>(
        &self,
        query: &[S],
    ) -> Result<Dispatch, QueryError> {
        for rule in &self.rules {
            let Some(captured) = rule.pattern.matches(query) else {
                continue;
            };
            debug!("Query matched rule '{}' with {:?}", rule.pattern, captured);

            return match rule.handler.handle(&captured).await? {
                Outcome::Exit => Ok(Dispatch::Exit),
                Outcome::Answers(lines) if lines.is_empty() => {
                    Ok(Dispatch::Reply(vec![NO_ANSWERS.to_string()]))
                }
                Outcome::Answers(lines) => Ok(Dispatch::Reply(lines)),
            };
        }

        debug!("No rule matched query");
        Ok(Dispatch::Reply(vec![NOT_UNDERSTOOD.to_string()]))
    }
}

impl Default for RuleDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
