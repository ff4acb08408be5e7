//! Interactive question loop on stdin/stdout.

use factbot_config::Config;
use tracing::info;

use super::build_query_loop;

/// Strategy for the interactive session.
///
/// Questions are read line by line; the session ends on an exit word
/// (`bye`, `exit`, `quit`) or end of input.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = Config;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let query_loop = build_query_loop(&input)?;

        info!("Starting interactive session");
        query_loop
            .run(std::io::stdin().lock(), std::io::stdout())
            .await?;
        info!("Session ended");

        Ok(())
    }
}
