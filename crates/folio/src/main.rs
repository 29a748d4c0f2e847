//! # Folio CLI (`folio`)
//!
//! Command-line front-end for the Folio portfolio assistant engine.
//!
//! ## Usage
//!
//! ```bash
//! folio --config ./folio.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `folio search "<query>"` | Rank the portfolio index against a query |
//! | `folio suggest "<prefix>"` | Propose completions for a partial query |
//! | `folio ask "<utterance>"` | Dispatch one utterance through the intent engine |
//! | `folio chat` | Interactive assistant session on stdin |
//! | `folio index` | Inspect the built document index |
//!
//! ## Examples
//!
//! ```bash
//! # Search the index
//! folio search "angular"
//!
//! # Ask the assistant something
//! folio ask "show projects"
//!
//! # Ask, and speak the answer
//! folio ask "what can you do" --speak
//!
//! # Interactive session
//! folio chat
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use folio::ask;
use folio::config;
use folio::inspect;
use folio::search;

/// Folio — a deterministic search and intent engine for a personal
/// portfolio.
///
/// All commands accept a `--config` flag pointing to a TOML
/// configuration file; when the file is absent, built-in defaults and
/// the embedded sample catalog are used.
#[derive(Parser)]
#[command(
    name = "folio",
    about = "Folio — deterministic search and intent engine for a personal portfolio",
    version,
    long_about = "Folio turns free-text queries and utterances into ranked portfolio search \
    results, query suggestions, and navigation/side-effect intents with natural-language \
    responses, using a small inspectable rule engine — no ML, no network."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./folio.toml`. Catalog path, engine capacities,
    /// and speech settings are read from this file.
    #[arg(long, global = true, default_value = "./folio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Search the portfolio index.
    ///
    /// Scores every document with the additive point system and
    /// prints up to 12 ranked results.
    Search {
        /// The search query string.
        query: String,

        /// Maximum number of results to print.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Propose completions for a partial query.
    ///
    /// Draws from the curated popular/quick-action lists and the top
    /// index matches; prints up to 8 de-duplicated suggestions.
    Suggest {
        /// The partial query (at least 2 characters).
        prefix: String,
    },

    /// Dispatch one utterance through the intent engine.
    ///
    /// Prints the natural-language response and renders any side
    /// effect (navigation, download, link, toggle) as a `->` line.
    Ask {
        /// The utterance, as typed or spoken.
        utterance: String,

        /// Speak the response via the synthesizer as well.
        #[arg(long)]
        speak: bool,
    },

    /// Interactive assistant session on stdin.
    ///
    /// Keeps one rolling conversation context and command history for
    /// the whole session. `/history`, `/reset`, and `/quit` are
    /// handled locally.
    Chat,

    /// Inspect the built document index.
    ///
    /// Prints per-kind document counts and every document id/title in
    /// index order.
    Index,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = config::load(&cli.config)?;

    match cli.command {
        Commands::Search { query, limit } => search::run_search(&config, &query, limit),
        Commands::Suggest { prefix } => search::run_suggest(&config, &prefix),
        Commands::Ask { utterance, speak } => ask::run_ask(&config, &utterance, speak),
        Commands::Chat => ask::run_chat(&config),
        Commands::Index => inspect::run_index(&config),
    }
}
