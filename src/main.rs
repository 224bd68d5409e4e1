//! Noteboard - a terminal note board.
//!
//! # Usage
//!
//! ```bash
//! noteboard
//! noteboard --legacy-ids --keep-stale-selection
//! noteboard --log-file board.log
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use noteboard::app::App;
use noteboard::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};

/// A terminal note board
#[derive(Parser, Debug)]
#[command(name = "noteboard", version, about, long_about = None)]
struct Cli {
    /// Assign ids as note count + 1 (ids may repeat after deletions)
    #[arg(long)]
    legacy_ids: bool,

    /// Refuse to save an edit whose title or content is blank
    #[arg(long)]
    validate_update: bool,

    /// Keep the form open when the note being edited is deleted
    #[arg(long)]
    keep_stale_selection: bool,

    /// Write debug logs to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            legacy_ids: self.legacy_ids,
            validate_update: self.validate_update,
            keep_stale_selection: self.keep_stale_selection,
            log_file: self.log_file.clone(),
        }
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let default_level = if log_file.is_some() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("NOTEBOARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_ref())?;
    tracing::debug!(?effective, "effective flags");

    let mut app = App::new()
        .with_id_policy(effective.id_policy())
        .with_policy(effective.board_policy());

    app.run().context("Application error")
}
