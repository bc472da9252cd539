//! `urlopen strategy` – show the launcher program for this platform.

use anyhow::Result;
use urlopen_core::config::UrlopenConfig;
use urlopen_core::Platform;

use super::launcher_for;

pub fn run_strategy(cfg: &UrlopenConfig, platform: Option<Platform>) -> Result<()> {
    let launcher = launcher_for(cfg, platform);
    let program = launcher.launcher_program()?;
    println!("{}: {}", launcher.platform(), program);
    Ok(())
}
