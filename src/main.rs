//! Wortle - CLI
//!
//! German Wordle in the terminal with TUI and plain CLI modes, plus
//! maintenance commands for the word store.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wortle::{
    commands::{
        ImportSource, compute_stats, run_add, run_delete, run_import, run_list, run_play,
        run_set_enabled, run_set_nsfw,
    },
    output::{print_import_report, print_stats},
    session::DrawOptions,
    store::WordStore,
};

#[derive(Parser)]
#[command(
    name = "wortle",
    about = "German Wordle in the terminal, backed by a persisted word store",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the store file (default: platform data directory)
    #[arg(short = 's', long, global = true)]
    store: Option<PathBuf>,

    /// Allow words flagged as sensitive content as secrets
    #[arg(long, global = true)]
    allow_nsfw: bool,

    /// Allow disabled words as secrets
    #[arg(long, global = true)]
    allow_disabled: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode without the TUI
    Simple,

    /// Import words into the store
    Import {
        /// Plain word list file (last token per line is the word)
        path: Option<PathBuf>,

        /// CSV word list; only rows tagged Substantiv are taken
        #[arg(long, conflicts_with = "path")]
        nouns_csv: Option<PathBuf>,
    },

    /// Manage stored words
    Words {
        #[command(subcommand)]
        command: WordsCommands,
    },

    /// Show aggregated game results
    Stats,
}

#[derive(Subcommand)]
enum WordsCommands {
    /// List all words with flags and play counts
    List,

    /// Add a single word
    Add {
        /// The word to add (normalized to uppercase)
        word: String,
    },

    /// Enable a word for the secret draw
    Enable {
        /// Word id as shown by 'words list'
        id: u64,
    },

    /// Exclude a word from the secret draw
    Disable {
        /// Word id as shown by 'words list'
        id: u64,
    },

    /// Set or clear the sensitive-content flag
    Nsfw {
        /// Word id as shown by 'words list'
        id: u64,

        /// Clear the flag instead of setting it
        #[arg(long)]
        clear: bool,
    },

    /// Delete a word and its results
    Delete {
        /// Word id as shown by 'words list'
        id: u64,
    },
}

fn open_store(path_override: Option<PathBuf>) -> Result<WordStore> {
    let path = match path_override {
        Some(path) => path,
        None => WordStore::default_path()
            .context("Could not determine a data directory; pass --store")?,
    };
    Ok(WordStore::open(path)?)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut store = open_store(cli.store)?;
    let options = DrawOptions {
        allow_nsfw: cli.allow_nsfw,
        allow_disabled: cli.allow_disabled,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(store, options),
        Commands::Simple => {
            ensure_words(&store)?;
            run_play(&mut store, options, io::stdin().lock())
        }
        Commands::Import { path, nouns_csv } => {
            let source = match (path, nouns_csv) {
                (Some(path), None) => ImportSource::PlainList(path),
                (None, Some(path)) => ImportSource::NounsCsv(path),
                (None, None) => ImportSource::Embedded,
                (Some(_), Some(_)) => unreachable!("clap rejects conflicting sources"),
            };
            let report = run_import(&mut store, &source)?;
            print_import_report(&report);
            Ok(())
        }
        Commands::Words { command } => match command {
            WordsCommands::List => {
                run_list(&store);
                Ok(())
            }
            WordsCommands::Add { word } => run_add(&mut store, &word),
            WordsCommands::Enable { id } => run_set_enabled(&mut store, id, true),
            WordsCommands::Disable { id } => run_set_enabled(&mut store, id, false),
            WordsCommands::Nsfw { id, clear } => run_set_nsfw(&mut store, id, !clear),
            WordsCommands::Delete { id } => run_delete(&mut store, id),
        },
        Commands::Stats => {
            print_stats(&compute_stats(&store));
            Ok(())
        }
    }
}

fn ensure_words(store: &WordStore) -> Result<()> {
    if store.is_empty() {
        bail!("The store is empty. Run 'wortle import' to load the seed word list.");
    }
    Ok(())
}

fn run_play_command(store: WordStore, options: DrawOptions) -> Result<()> {
    use wortle::interactive::{App, run_tui};

    ensure_words(&store)?;
    let app = App::new(store, options)?;
    run_tui(app)
}
