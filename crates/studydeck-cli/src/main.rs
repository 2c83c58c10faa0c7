//! studydeck CLI — interactive flashcard study from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studydeck", version, about = "Flashcard study sessions with free-text self-assessment")]
struct Cli {
    /// Log bank transitions and classifier decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a deck and a classifier, then study until every card is right (default)
    Study {
        /// Directory of `.txt` decks (overrides the config file)
        #[arg(long)]
        deck_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate deck files
    Validate {
        /// Path to a deck file or a directory of decks
        #[arg(long)]
        deck: PathBuf,
    },

    /// Classify replies as positive or negative
    Classify {
        /// Replies to classify
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Score every classifier against the built-in dataset
    Evaluate,

    /// Create a starter config and example deck
    Init,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("studydeck={level}").parse().unwrap()),
        )
        .init();

    let result = match cli.command {
        Some(Commands::Study { deck_dir, config }) => commands::study::execute(deck_dir, config),
        None => commands::study::execute(None, None),
        Some(Commands::Validate { deck }) => commands::validate::execute(deck),
        Some(Commands::Classify { text }) => commands::classify::execute(text),
        Some(Commands::Evaluate) => commands::evaluate::execute(),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
