use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use typedemo_core::{AppConfig, ScriptRegistry};

mod commands;

#[derive(Parser)]
#[command(name = "typedemo")]
#[command(author, version, about = "Scripted code-typing demos in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the full-screen player
    Run {
        /// Tab to show first (tab, chat, rules, inline, context, mcp, mermaid)
        #[arg(short, long)]
        tab: Option<String>,
        /// Chat mode to show first (agent, ask, manual)
        #[arg(short, long)]
        mode: Option<String>,
    },
    /// List registered demos
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the final text of a demo
    Show {
        /// Demo identifier
        demo: String,
    },
    /// Type a demo to stdout in real time
    Play {
        /// Demo identifier
        demo: String,
        /// Stop after this many complete loops
        #[arg(short = 'n', long)]
        loops: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // The full-screen player owns the terminal, keep it quiet
    let default_level = match cli.command {
        Some(Commands::Run { .. }) | None => "warn".to_string(),
        _ => config.general.log_level.clone(),
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or(default_level),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let registry = Arc::new(ScriptRegistry::builtin());

    match cli.command {
        Some(Commands::Run { tab, mode }) => {
            commands::run::run(config, registry, tab, mode).await
        }
        None => commands::run::run(config, registry, None, None).await,
        Some(Commands::List { json }) => commands::list::run(&registry, json),
        Some(Commands::Show { demo }) => commands::show::run(&registry, &demo),
        Some(Commands::Play { demo, loops }) => {
            commands::play::run(Arc::new(config), registry, &demo, loops).await
        }
    }
}
