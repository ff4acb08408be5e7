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

mod command;

use clap::{Parser, Subcommand};
use factbot_config::Config;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use command::{
    AskInput, AskStrategy, ChatStrategy, CommandStrategy, InfoStrategy, InitStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "factbot")]
#[command(about = "Answers simple questions about countries from Wikipedia infoboxes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask questions interactively (default)
    Chat,
    /// Answer a single question and exit
    Ask {
        /// The question, e.g. "what is the capital of peru"
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level(&loaded)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => ChatStrategy.execute(loaded?).await,
        Commands::Ask { question } => {
            AskStrategy
                .execute(AskInput {
                    config: loaded?,
                    question: question.join(" "),
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(loaded?).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}

/// Log level from the config file, or `warn` when it could not be loaded.
fn log_level(loaded: &anyhow::Result<Config>) -> &str {
    loaded.as_ref().map_or("warn", |config| config.log_level.as_str())
}
