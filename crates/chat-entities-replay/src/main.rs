//! Replays newline-delimited chat actions through the entity store.
//!
//! Each input line is one wire action (`{"type": "...", "data": ...}`). After
//! the replay a per-slice summary is printed and, when asked for, the final
//! entity state is written as a snapshot.

mod logger;
mod replay;
mod summary;

use anyhow::{Context, Result};
use chat_entities::middleware::{LoggingMiddleware, OfflineMiddleware};
use chat_entities::persist;
use chat_entities::utils::Localizer;
use chat_entities::{EntitiesState, Store};
use chat_entities_config::StoreConfig;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::summary::Report;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replay recorded chat actions through the entity store",
    long_about = None
)]
struct Cli {
    /// File with one JSON action per line; reads stdin when omitted
    input: Option<PathBuf>,

    /// Start from a previously saved snapshot instead of an empty store
    #[arg(long, value_name = "PATH")]
    from_snapshot: Option<PathBuf>,

    /// Write the final entity state to this snapshot file
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Abort on the first line that is not a valid action
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = StoreConfig::load();

    let log_file = logger::init(&config.log_level)?;
    log::info!("Logging to {:?}", log_file);

    let localizer = load_localizer(&config);
    let (from_snapshot, snapshot) = snapshot_paths(&cli, &config);

    let initial = match &from_snapshot {
        Some(path) => persist::load_entities(path)?,
        None => Arc::new(EntitiesState::default()),
    };

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open input: {:?}", path))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let report = run(initial, reader, cli.strict, snapshot.as_deref())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", summary::render_text(&localizer, &report));
    }
    Ok(())
}

/// Snapshot input and output paths; the config's snapshot is used for both
/// when persistence is enabled and no flag overrides it
fn snapshot_paths(cli: &Cli, config: &StoreConfig) -> (Option<PathBuf>, Option<PathBuf>) {
    let configured = if config.persist_snapshot {
        config
            .resolved_snapshot_path()
            .map_err(|e| log::warn!("No snapshot location available: {}", e))
            .ok()
    } else {
        None
    };

    (
        cli.from_snapshot.clone().or_else(|| configured.clone()),
        cli.snapshot.clone().or(configured),
    )
}

fn load_localizer(config: &StoreConfig) -> Localizer {
    let path = match config.resolved_translations_path() {
        Ok(path) if path.exists() => path,
        _ => return Localizer::new(config.locale.clone(), Default::default()),
    };

    Localizer::from_json_file(config.locale.clone(), &path).unwrap_or_else(|e| {
        log::warn!("Using untranslated labels: {:#}", e);
        Localizer::new(config.locale.clone(), Default::default())
    })
}

fn run<R: BufRead>(
    initial: Arc<EntitiesState>,
    reader: R,
    strict: bool,
    snapshot: Option<&Path>,
) -> Result<Report> {
    let mut store = Store::new(initial);
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(OfflineMiddleware::new()));

    let stats = replay::replay(&mut store, reader, strict)?;

    if let Some(path) = snapshot {
        persist::save_entities(path, store.state())?;
        log::info!("Saved snapshot to {:?}", path);
    }

    Ok(Report {
        stats,
        slices: summary::slice_sizes(store.state()),
    })
}
