//! `urlopen open <url>` – open a URL in the default browser.

use anyhow::Result;
use urlopen_core::config::UrlopenConfig;
use urlopen_core::{Platform, TargetUrl};

use super::launcher_for;

pub fn run_open(
    cfg: &UrlopenConfig,
    url: &str,
    platform: Option<Platform>,
    dry_run: bool,
) -> Result<()> {
    let launcher = launcher_for(cfg, platform);
    if dry_run {
        let target = TargetUrl::parse(url)?;
        let plan = launcher.plan(&target)?;
        println!("{plan}");
        return Ok(());
    }
    launcher.open(url)?;
    tracing::info!("opened {} on {}", url, launcher.platform());
    Ok(())
}
