//! Namebook - Main entrypoint.
//!
//! Initializes the logging system, builds the selected store backend,
//! preloads names if a seed file was given, and runs the interactive
//! loop over stdin/stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;

use namebook_lib::repl;
use namebook_lib::store::{JumpStore, NameStore, NameTrie, ScanStore};

/// Command line arguments for the namebook.
#[derive(Parser, Debug)]
#[clap(name = "namebook", version, author, about)]
struct Args {
    /// Store backend used to hold names
    #[clap(short, long, value_enum, default_value_t = Backend::Trie)]
    backend: Backend,

    /// File with one name per line to load before the session starts
    #[clap(short, long, value_parser)]
    preload: Option<PathBuf>,
}

/// Available store backends.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Backend {
    /// Counting character trie
    Trie,
    /// Sorted buckets with jump search
    Jump,
    /// Unsorted buckets with linear scan
    Scan,
}

impl Backend {
    fn build(self) -> Box<dyn NameStore> {
        match self {
            Backend::Trie => Box::new(NameTrie::new()),
            Backend::Jump => Box::new(JumpStore::new()),
            Backend::Scan => Box::new(ScanStore::new()),
        }
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so the session output on stdout stays clean.
fn init_logging() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global tracing subscriber")
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    let args = Args::parse();
    let mut store = args.backend.build();

    if let Some(path) = &args.preload {
        let added = repl::preload_path(store.as_mut(), path)
            .with_context(|| format!("failed to preload names from {}", path.display()))?;
        info!(added, path = %path.display(), "preloaded names");
    }

    info!(backend = ?args.backend, version = namebook_lib::VERSION, "starting notebook session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(store.as_mut(), stdin.lock(), stdout.lock())?;

    Ok(())
}
