//! Linux/FreeBSD launcher selection.

use crate::error::LaunchError;
use crate::runner::CommandRunner;

/// Launcher programs tried on Linux and FreeBSD, in order.
pub const NIX_STRATEGIES: [&str; 3] = ["xdg-open", "sensible-browser", "x-www-browser"];

/// Returns the first program in [`NIX_STRATEGIES`] that `runner` reports as present.
///
/// Probing stops at the first hit; later candidates are never probed.
pub fn select_strategy<R: CommandRunner + ?Sized>(runner: &R) -> Result<&'static str, LaunchError> {
    for candidate in NIX_STRATEGIES {
        if runner.exists(candidate) {
            tracing::debug!("launcher strategy selected: {}", candidate);
            return Ok(candidate);
        }
        tracing::debug!("launcher strategy {} not found", candidate);
    }
    Err(LaunchError::NoStrategyAvailable)
}
