//! Host operating system identification.
//!
//! The launcher never reads the OS itself; it is handed a `Platform`, so any
//! OS can be simulated. `Platform::current()` is the only place the real host
//! is consulted.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    FreeBsd,
    /// Any other OS; keeps the identifier it was detected as.
    Unsupported(String),
}

impl Platform {
    /// Platform of the running process (`std::env::consts::OS`).
    pub fn current() -> Self {
        Self::from_os_id(std::env::consts::OS)
    }

    /// Maps an OS identifier to a platform. Both `darwin` and `macos` mean macOS.
    pub fn from_os_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "darwin" | "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            "freebsd" => Platform::FreeBsd,
            _ => Platform::Unsupported(id.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Platform::MacOs => "darwin",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::FreeBsd => "freebsd",
            Platform::Unsupported(id) => id,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_os_id(s))
    }
}
