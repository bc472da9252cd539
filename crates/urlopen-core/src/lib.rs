//! Open URLs in the host's default web browser.
//!
//! macOS uses `open`, Windows uses `start`, Linux and FreeBSD use the first of
//! `xdg-open`, `sensible-browser`, `x-www-browser` found on `PATH`. Inputs
//! without a scheme are opened as `https`.

pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod platform;
pub mod runner;
pub mod target_url;

pub use error::LaunchError;
pub use launcher::{LaunchPlan, Launcher};
pub use platform::Platform;
pub use runner::{CommandRunner, SystemRunner};
pub use target_url::{TargetUrl, UrlParseError, UrlParseErrorKind};

/// Parses `raw` and opens it with the host's default browser.
pub fn open(raw: &str) -> Result<(), LaunchError> {
    Launcher::system().open(raw)
}

/// Opens `url` with the host's default browser. `url` is left unchanged.
pub fn open_url(url: &TargetUrl) -> Result<(), LaunchError> {
    Launcher::system().open_url(url)
}
