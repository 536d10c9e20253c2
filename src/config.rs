//! Runtime configuration.

use std::path::PathBuf;

use crate::cli::Cli;

/// Log file name inside the state directory.
pub const LOG_FILE_NAME: &str = "wordhunt.log";

/// Complete game configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Seed corpus file; `None` uses the built-in list.
    pub corpus: Option<PathBuf>,

    /// Dictionary file; `None` uses the built-in list.
    pub dictionary: Option<PathBuf>,

    /// Directory for the saved round.
    pub state_dir: PathBuf,

    pub log_level: String,

    /// Where the interactive game writes its log.
    pub log_file: PathBuf,

    /// Deterministic seed-word selection.
    pub rng_seed: Option<u64>,

    /// Use an in-memory store instead of `state_dir`.
    pub ephemeral: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let state_dir = expand_home(&PathBuf::from("~/.wordhunt"));
        Self {
            corpus: None,
            dictionary: None,
            log_file: state_dir.join(LOG_FILE_NAME),
            state_dir,
            log_level: "info".to_string(),
            rng_seed: None,
            ephemeral: false,
        }
    }
}

impl Settings {
    /// Create a configuration from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let state_dir = expand_home(&cli.state_dir);
        let log_file = cli
            .log_file
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(|| state_dir.join(LOG_FILE_NAME));

        Self {
            corpus: cli.corpus.as_deref().map(expand_home),
            dictionary: cli.dictionary.as_deref().map(expand_home),
            state_dir,
            log_level: cli.log_level.clone(),
            log_file,
            rng_seed: cli.seed,
            ephemeral: cli.ephemeral,
        }
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &std::path::Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if let Some(stripped) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
