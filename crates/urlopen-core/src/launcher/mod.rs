//! URL launcher: normalize, pick the OS launcher program, run it.
//!
//! macOS uses `open`, Windows uses `start`, Linux and FreeBSD use the first
//! of `xdg-open`, `sensible-browser`, `x-www-browser` found on `PATH`.

mod strategy;

use std::fmt;

use crate::config::UrlopenConfig;
use crate::error::LaunchError;
use crate::platform::Platform;
use crate::runner::{CommandRunner, SystemRunner};
use crate::target_url::{TargetUrl, DEFAULT_SCHEME};

pub use strategy::{select_strategy, NIX_STRATEGIES};

/// Program and arguments that will be run to open a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for LaunchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Opens URLs for one platform through one `CommandRunner`.
#[derive(Debug, Clone)]
pub struct Launcher<R = SystemRunner> {
    platform: Platform,
    runner: R,
    default_scheme: String,
}

impl Launcher<SystemRunner> {
    /// Launcher for the running host, spawning real processes.
    pub fn system() -> Self {
        Self::new(Platform::current(), SystemRunner::new())
    }

    /// Host launcher with probe program, output handling and default scheme from `cfg`.
    pub fn from_config(cfg: &UrlopenConfig) -> Self {
        let runner = SystemRunner::new()
            .with_probe_program(cfg.probe_program.clone())
            .quiet(cfg.quiet_launcher);
        Self::new(Platform::current(), runner).with_default_scheme(cfg.default_scheme.clone())
    }
}

impl<R: CommandRunner> Launcher<R> {
    pub fn new(platform: Platform, runner: R) -> Self {
        Self {
            platform,
            runner,
            default_scheme: DEFAULT_SCHEME.to_string(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Scheme given to URLs that have none (default `https`).
    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Parses `raw` and opens it. A parse failure returns before anything is spawned.
    pub fn open(&self, raw: &str) -> Result<(), LaunchError> {
        let url = TargetUrl::parse(raw)?;
        self.open_url(&url)
    }

    /// Opens `url` in the default browser, blocking until the launcher program exits.
    ///
    /// `url` is not modified; a schemeless URL is opened with the default scheme.
    /// If the selected launcher fails, that failure is returned as-is; no other
    /// launcher is tried.
    pub fn open_url(&self, url: &TargetUrl) -> Result<(), LaunchError> {
        let plan = self.plan(url)?;
        tracing::debug!("running launcher: {}", plan);
        self.runner.run(&plan.program, &plan.args)
    }

    /// Resolves what [`open_url`](Self::open_url) would run, without running it.
    /// On Linux/FreeBSD this still probes for the launcher program.
    pub fn plan(&self, url: &TargetUrl) -> Result<LaunchPlan, LaunchError> {
        let target = url.normalize_with(&self.default_scheme);
        tracing::debug!("opening {} on {}", target, self.platform);
        let program = self.launcher_program()?;
        Ok(LaunchPlan {
            program: program.to_string(),
            args: vec![target.to_string()],
        })
    }

    /// Launcher program for this platform.
    pub fn launcher_program(&self) -> Result<&'static str, LaunchError> {
        match &self.platform {
            Platform::MacOs => Ok("open"),
            Platform::Windows => Ok("start"),
            Platform::Linux | Platform::FreeBsd => select_strategy(&self.runner),
            Platform::Unsupported(os) => Err(LaunchError::UnsupportedPlatform(os.clone())),
        }
    }
}
