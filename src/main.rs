use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use wordhunt::cli::{self, Cli, Commands};
use wordhunt::config::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let settings = Settings::from_cli(&cli);
    let command = cli.command();

    // The interactive screen owns the terminal, so its logs go to a file
    init_logging(&settings, command == Commands::Play)?;
    tracing::info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    cli::run_cli(command, &settings)
}

fn init_logging(settings: &Settings, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if to_file {
        if let Some(parent) = settings.log_file.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.log_file)
            .with_context(|| format!("opening log file {}", settings.log_file.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}
