//! Launch error type returned by every public operation.

use std::io;
use std::process::ExitStatus;

use crate::target_url::UrlParseError;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// Input string is not a valid URL.
    #[error("invalid URL: {0}")]
    Parse(#[from] UrlParseError),
    /// Host OS has no launch strategy. Carries the detected OS identifier.
    #[error("OS type {0} not supported")]
    UnsupportedPlatform(String),
    /// Linux/FreeBSD: none of the candidate launcher programs is on `PATH`.
    #[error("no strategy available")]
    NoStrategyAvailable,
    /// Launcher process could not be started.
    #[error("{program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// Launcher ran but did not exit successfully.
    #[error("{program}: {status}")]
    ExitStatus { program: String, status: ExitStatus },
}
