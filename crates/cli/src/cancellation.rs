//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Define the `Cancelled` error used to signal Ctrl+C through `anyhow::Result`.
//! - Race a command future against SIGINT.
//!
//! Invariants:
//! - A cancelled command maps to exit code 130.

use std::fmt;
use std::future::Future;

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

/// Run `fut` until it completes or Ctrl+C is received.
pub async fn run_cancellable<F, T>(fut: F) -> anyhow::Result<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    tokio::select! {
        res = fut => res,
        signal = tokio::signal::ctrl_c() => {
            // Only fails if the signal handler cannot be installed.
            signal?;
            Err(Cancelled.into())
        }
    }
}
