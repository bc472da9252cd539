//! CLI command handlers, one per file.

mod config_path;
mod open;
mod strategy;

pub use config_path::run_config_path;
pub use open::run_open;
pub use strategy::run_strategy;

use urlopen_core::config::UrlopenConfig;
use urlopen_core::{Launcher, Platform};

/// Host launcher from config, with the detected platform optionally overridden.
fn launcher_for(cfg: &UrlopenConfig, platform: Option<Platform>) -> Launcher {
    let launcher = Launcher::from_config(cfg);
    match platform {
        Some(p) => launcher.with_platform(p),
        None => launcher,
    }
}
