//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, so dispatch
//! from `main` is resolved at compile time.

use std::sync::Arc;

use anyhow::Context;
use factbot_config::Config;
use factbot_core::{PageResolver, QueryLoop, RuleDispatcher};
use factbot_wiki::WikipediaResolver;
use tracing::info;

mod ask;
mod chat;
mod info;
mod init;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use chat::ChatStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Build the query loop with the default rules over the configured
/// encyclopedia.
fn build_query_loop(config: &Config) -> anyhow::Result<QueryLoop> {
    let resolver: Arc<dyn PageResolver> = Arc::new(WikipediaResolver::new(config.wiki.clone())?);
    let dispatcher =
        RuleDispatcher::with_default_rules(resolver).context("Failed to build rule table")?;

    info!(
        "Query loop ready: {} rules, api_url={}",
        dispatcher.rules().len(),
        config.wiki.api_url
    );
    Ok(QueryLoop::new(dispatcher))
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, so
/// parameters are passed without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
