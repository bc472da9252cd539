use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::runner::DEFAULT_PROBE_PROGRAM;
use crate::target_url::{is_valid_scheme, DEFAULT_SCHEME};

/// Global configuration loaded from `~/.config/urlopen/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlopenConfig {
    /// Scheme given to URLs that have none.
    pub default_scheme: String,
    /// Program used to check whether a Linux/FreeBSD launcher is on `PATH`.
    pub probe_program: String,
    /// Discard the launcher's stdout/stderr instead of inheriting them.
    pub quiet_launcher: bool,
}

impl Default for UrlopenConfig {
    fn default() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
            probe_program: DEFAULT_PROBE_PROGRAM.to_string(),
            quiet_launcher: false,
        }
    }
}

impl UrlopenConfig {
    pub fn validate(&self) -> Result<()> {
        if !is_valid_scheme(&self.default_scheme) {
            anyhow::bail!("default_scheme {:?} is not a valid URL scheme", self.default_scheme);
        }
        if self.probe_program.trim().is_empty() {
            anyhow::bail!("probe_program must not be empty");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlopen")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlopenConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlopenConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from `path`.
pub fn load_from(path: &Path) -> Result<UrlopenConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UrlopenConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = UrlopenConfig::default();
        assert_eq!(cfg.default_scheme, "https");
        assert_eq!(cfg.probe_program, "which");
        assert!(!cfg.quiet_launcher);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlopenConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlopenConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: UrlopenConfig = toml::from_str("quiet_launcher = true").unwrap();
        assert!(cfg.quiet_launcher);
        assert_eq!(cfg.default_scheme, "https");
        assert_eq!(cfg.probe_program, "which");
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_scheme = "http"
            probe_program = "/usr/bin/which"
            quiet_launcher = true
        "#;
        let cfg: UrlopenConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_scheme, "http");
        assert_eq!(cfg.probe_program, "/usr/bin/which");
        assert!(cfg.quiet_launcher);
    }

    #[test]
    fn validate_rejects_bad_scheme() {
        let cfg = UrlopenConfig {
            default_scheme: "ht tp".to_string(),
            ..UrlopenConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = UrlopenConfig {
            probe_program: " ".to_string(),
            ..UrlopenConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"default_scheme = \"http\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.default_scheme, "http");
    }

    #[test]
    fn load_from_invalid_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"default_scheme = \"1nvalid\"\n").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("not a valid URL scheme"));
    }
}
