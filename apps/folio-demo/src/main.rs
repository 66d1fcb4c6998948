//! # Folio Demo
//!
//! Runs the scripted lending session against an in-memory catalog.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Build the catalog and run the script
//! 4. Optionally dump the event history as JSON
//!
//! ## Usage
//! ```bash
//! cargo run -p folio-demo
//! RUST_LOG=folio_core=debug FOLIO_LOG_HISTORY=true cargo run -p folio-demo
//! ```

mod config;
mod script;

use std::io;

use folio_core::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = DemoConfig::load()?;
    info!(
        library = %config.library_name,
        log_history = config.log_history,
        "Configuration loaded"
    );

    let mut catalog = Catalog::new(config.library_name.as_str());
    let stdout = io::stdout();
    let report = script::run(&mut catalog, &mut stdout.lock())?;
    info!(?report, "Lending session complete");

    if config.log_history {
        let history = serde_json::to_string_pretty(catalog.history())?;
        info!("Event history:\n{history}");
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (including every recorded event)
/// - Default: `info`, with `folio_core` at info as well
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,folio_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
