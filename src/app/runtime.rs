//! Process-level setup: `.env` loading, logging, and the rayon pool.
//!
//! Environment knobs:
//! - `RUST_LOG`: tracing filter (default `warn`)
//! - `NPL_THREADS`: worker threads for grid evaluation (default: rayon's choice)

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

const THREADS_VAR: &str = "NPL_THREADS";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Load `.env`, install the tracing subscriber and size the rayon pool.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init() -> Result<(), AppError> {
    if INITIALISED.set(()).is_err() {
        return Ok(());
    }

    dotenvy::dotenv().ok();
    init_tracing();

    if let Some(threads) = threads_from_env()? {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| AppError::input(format!("Failed to configure {THREADS_VAR}={threads}: {e}")))?;
        debug!(threads, "rayon pool configured");
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

fn threads_from_env() -> Result<Option<usize>, AppError> {
    match std::env::var(THREADS_VAR) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => parse_threads(&raw).map(Some),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::input(format!("Failed to read {THREADS_VAR}: {e}"))),
    }
}

fn parse_threads(raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::input(format!(
            "{THREADS_VAR} must be a positive integer, got '{raw}'."
        ))),
    }
}
