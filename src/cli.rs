use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::Settings;
use crate::core::engine::Engine;
use crate::games::scramble::ScrambleGame;
use crate::games::GAME_INFO;
use crate::words::{
    FileStore, MemoryStore, PersistenceStore, RoundEngine, WordCorpus, WordListDictionary,
};

/// Engine as wired up by the binary.
pub type AppEngine = RoundEngine<WordListDictionary, Box<dyn PersistenceStore>>;

#[derive(Parser, Debug, Clone)]
#[command(name = "wordhunt")]
#[command(about = "🔤 Find words hidden in the letters of a seed word")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed word list, one word per line (defaults to the built-in list)
    #[arg(long, global = true, env = "WORDHUNT_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Dictionary word list, e.g. /usr/share/dict/words (defaults to the built-in list)
    #[arg(long, global = true, env = "WORDHUNT_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Directory holding the saved round
    #[arg(long, global = true, env = "WORDHUNT_STATE_DIR", default_value = "~/.wordhunt")]
    pub state_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Log file for the interactive game (defaults to <state-dir>/wordhunt.log)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Fixed RNG seed for picking seed words
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Keep the round in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Play in the terminal (default)
    Play,
    /// Show the current seed word and found words
    Status,
    /// Discard the current round and pick a new seed word
    NewRound,
    /// Check one word against the current round
    Submit {
        /// The word to submit
        word: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Play)
    }
}

/// Wire corpus, dictionary and store together according to `settings`.
pub fn build_engine(settings: &Settings) -> AppEngine {
    let corpus = match &settings.corpus {
        Some(path) => WordCorpus::load(path),
        None => WordCorpus::embedded(),
    };
    let dictionary = WordListDictionary::load_or_embedded(settings.dictionary.as_deref());
    let store: Box<dyn PersistenceStore> = if settings.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&settings.state_dir))
    };
    match settings.rng_seed {
        Some(seed) => RoundEngine::with_rng(corpus, dictionary, store, StdRng::seed_from_u64(seed)),
        None => RoundEngine::new(corpus, dictionary, store),
    }
}

pub fn run_cli(command: Commands, settings: &Settings) -> Result<()> {
    let mut engine = build_engine(settings);

    match command {
        Commands::Play => {
            let mut terminal = ratatui::init();
            let result = Engine::new(ScrambleGame::new(engine)).run(&mut terminal);
            ratatui::restore();
            let engine = result.context("terminal session failed")?.into_engine();
            info!(seed = %engine.seed(), found = engine.used_words().len(), "session ended");
        }

        Commands::Status => print_round(&engine),

        Commands::NewRound => {
            engine.start_round();
            println!("🎲 New round: {}", engine.seed());
        }

        Commands::Submit { word } => match engine.submit(&word) {
            Ok(accepted) => println!("✅ '{}' accepted", accepted.word),
            Err(rejection) => println!("❌ {}: {}", rejection.title(), rejection),
        },
    }

    Ok(())
}

fn print_round(engine: &AppEngine) {
    println!("{} - {}", GAME_INFO.name, GAME_INFO.description);
    println!();
    println!("Seed word: {}", engine.seed());
    println!("Found {} word(s):", engine.used_words().len());
    for word in engine.used_words() {
        println!("  • {}", word);
    }
}
