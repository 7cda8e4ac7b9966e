use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jisho_client::JishoClient;
use jisho_config::Config;
use jisho_types::LauncherEvent;

use crate::feedback::Feedback;

pub mod events;
pub mod feedback;
pub mod logging;
pub mod state;

use self::state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Jisho.org lookups for desktop launchers", long_about = None)]
struct Cli {
    /// JSON config file; environment variables still override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum number of rows to show
    #[arg(long, global = true)]
    max_results: Option<usize>,

    /// Word search endpoint
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Pretty-print feedback JSON even when stdout is not a terminal
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search Jisho and print launcher feedback
    Search {
        /// Query words, joined with single spaces
        query: Vec<String>,
    },
    /// Open an entry page in the default browser
    Open { url: String },
    /// Print text for the enlarged view
    LargeText { text: Vec<String> },
}

impl Command {
    fn into_event(self) -> LauncherEvent {
        match self {
            Command::Search { query } => LauncherEvent::Search(query.join(" ")),
            Command::Open { url } => LauncherEvent::Open(url),
            Command::LargeText { text } => LauncherEvent::LargeText(text.join(" ")),
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };

    if let Some(max_results) = cli.max_results {
        config.display.max_results = max_results;
    }
    if let Some(api_url) = &cli.api_url {
        config.api.api_url = api_url.clone();
    }

    Ok(config)
}

async fn run(cli: Cli, out: &mut impl Write, pretty: bool) -> anyhow::Result<()> {
    let config = match logging::with_bootstrap(|| load_config(&cli)) {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Command::Search { .. }) => {
            logging::with_bootstrap(|| tracing::error!("Failed to load config: {e:#}"));
            return Feedback::default().write_to(out, pretty);
        }
        Err(e) => return Err(e),
    };
    logging::init(&config.log);

    tracing::debug!("Starting with args: {:?}", cli);

    let source = JishoClient::new(&config.api)?;
    let state = AppState::new(config, Box::new(source));

    events::handle_event(&state, cli.command.into_event(), out, pretty).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let pretty = cli.pretty || atty::is(atty::Stream::Stdout);

    let mut stdout = io::stdout().lock();
    run(cli, &mut stdout, pretty).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_words_joined() {
        let cli = Cli::parse_from(["jisho-launcher", "search", "to", "eat"]);
        assert_eq!(
            cli.command.into_event(),
            LauncherEvent::Search("to eat".to_string())
        );
    }

    #[test]
    fn quoted_query_kept() {
        let cli = Cli::parse_from(["jisho-launcher", "search", "\"date\""]);
        assert_eq!(
            cli.command.into_event(),
            LauncherEvent::Search("\"date\"".to_string())
        );
    }

    #[test]
    fn empty_search_allowed() {
        let cli = Cli::parse_from(["jisho-launcher", "search"]);
        assert_eq!(cli.command.into_event(), LauncherEvent::Search(String::new()));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "jisho-launcher",
            "search",
            "neko",
            "--max-results",
            "3",
            "--api-url",
            "http://localhost:9000/search",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.display.max_results, 3);
        assert_eq!(config.api.api_url, "http://localhost:9000/search");
    }

    #[test]
    fn open_and_large_text() {
        let cli = Cli::parse_from(["jisho-launcher", "open", "https://jisho.org/word/猫"]);
        assert_eq!(
            cli.command.into_event(),
            LauncherEvent::Open("https://jisho.org/word/猫".to_string())
        );

        let cli = Cli::parse_from(["jisho-launcher", "large-text", "ねこ", "(猫)"]);
        assert_eq!(
            cli.command.into_event(),
            LauncherEvent::LargeText("ねこ (猫)".to_string())
        );
    }

    #[tokio::test]
    async fn bad_config_file_still_prints_empty_feedback() {
        let cli = Cli::parse_from([
            "jisho-launcher",
            "--config",
            "/nonexistent/jisho-launcher/config.json",
            "search",
            "date",
        ]);
        let mut out = Vec::new();

        run(cli, &mut out, false).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "{\"items\":[]}\n");
    }

    #[tokio::test]
    async fn bad_config_file_fails_other_commands() {
        let cli = Cli::parse_from([
            "jisho-launcher",
            "--config",
            "/nonexistent/jisho-launcher/config.json",
            "large-text",
            "ねこ",
        ]);
        let mut out = Vec::new();

        assert!(run(cli, &mut out, false).await.is_err());
        assert!(out.is_empty());
    }
}
