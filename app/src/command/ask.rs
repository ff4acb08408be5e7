use factbot_config::Config;
use factbot_core::Dispatch;

use super::build_query_loop;

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    pub config: Config,
    /// Raw question text, tokenized the same way as interactive input
    pub question: String,
}

/// Strategy for answering one question non-interactively.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let query_loop = build_query_loop(&input.config)?;

        match query_loop.ask(&input.question).await? {
            Dispatch::Reply(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Dispatch::Exit => println!("{}", factbot_core::repl::FAREWELL),
        }

        Ok(())
    }
}
