use factbot_config::Config;
use factbot_core::FactKind;

/// Strategy for displaying configuration information.
///
/// Prints the config file location, the encyclopedia client settings and
/// the questions the bot understands.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Config;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        println!("=== factbot Configuration ===\n");

        let path = Config::config_path()?;
        let source = if path.exists() { "" } else { " (not found, using defaults)" };
        println!("Config File: {}{source}", path.display());
        println!();

        println!("Wiki:");
        println!("  API URL: {}", input.wiki.api_url);
        println!("  Timeout: {}s", input.wiki.timeout);
        println!("  User-Agent: {}", truncate(&input.wiki.user_agent, 60));
        println!("  Max Size: {} bytes", input.wiki.max_size);
        println!();

        println!("Logging:");
        println!("  Level: {}", input.log_level);
        println!();

        println!("Questions:");
        for kind in FactKind::ALL {
            println!("  {}", kind.question().replace('%', "<country>"));
        }

        Ok(())
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
