//! Line-oriented question/answer loop.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::dispatch::{Dispatch, RuleDispatcher};
use crate::error::QueryError;
use crate::query::tokenize;

pub const WELCOME: &str = "Welcome to the Wikipedia chatbot!";
pub const PROMPT: &str = "Your query? ";
pub const FAREWELL: &str = "So long!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Reads one question per line, answers it, and stops on an exit word or
/// end of input. Each query is fully answered before the next line is read.
pub struct QueryLoop {
    dispatcher: RuleDispatcher,
}

impl QueryLoop {
    #[must_use]
    pub const fn new(dispatcher: RuleDispatcher) -> Self {
        Self { dispatcher }
    }

    #[must_use]
    pub const fn dispatcher(&self) -> &RuleDispatcher {
        &self.dispatcher
    }

    /// Answer a single raw input line.
    pub async fn ask(&self, line: &str) -> Result<Dispatch, QueryError> {
        let query = tokenize(line);
        self.dispatcher.dispatch(&query).await
    }

    /// Handle one turn. `None` means the input is exhausted.
    pub async fn step<W: Write>(
        &self,
        line: Option<&str>,
        output: &mut W,
    ) -> anyhow::Result<LoopState> {
        let Some(line) = line else {
            info!("End of input");
            return Ok(LoopState::Terminated);
        };

        match self.ask(line).await {
            Ok(Dispatch::Exit) => {
                info!("Exit requested");
                Ok(LoopState::Terminated)
            }
            Ok(Dispatch::Reply(lines)) => {
                for answer in lines {
                    writeln!(output, "{answer}")?;
                }
                Ok(LoopState::Running)
            }
            Err(e) => {
                warn!("Query failed: {e}");
                writeln!(output, "{e}")?;
                Ok(LoopState::Running)
            }
        }
    }

    /// Run until an exit word or end of input, then print the farewell.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> anyhow::Result<()> {
        writeln!(output, "{WELCOME}")?;
        writeln!(output)?;

        let mut state = LoopState::Running;
        while state == LoopState::Running {
            writeln!(output)?;
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let mut buf = Vec::new();
            let line = match input.read_until(b'\n', &mut buf)? {
                0 => None,
                _ => Some(String::from_utf8_lossy(&buf)),
            };
            state = self.step(line.as_deref(), &mut output).await?;
        }

        writeln!(output)?;
        writeln!(output, "{FAREWELL}")?;
        writeln!(output)?;
        output.flush()?;
        Ok(())
    }
}
