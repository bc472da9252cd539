//! URL value handed to the launcher.
//!
//! A `TargetUrl` is an RFC 3986 reference: it may be absolute (`https://...`)
//! or relative (`example.com/docs`). Relative values get a scheme during
//! normalization so the launcher always receives something a browser can open.

mod error;
mod parse;

use std::fmt;
use std::str::FromStr;

pub use error::{UrlParseError, UrlParseErrorKind};

/// Scheme given to URLs that were parsed without one.
pub const DEFAULT_SCHEME: &str = "https";

/// Parsed URL reference. Fields are kept as written, never decoded; `%` escapes
/// are checked in the path, userinfo, host and fragment only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl {
    scheme: Option<String>,
    opaque: Option<String>,
    authority: Option<Authority>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

/// `[userinfo@]host[:port]`. IPv6 hosts keep their brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    userinfo: Option<String>,
    host: String,
    port: Option<String>,
}

impl TargetUrl {
    /// Parses `raw` as an absolute URL or a relative reference.
    ///
    /// # Examples
    ///
    /// - `"https://example.com/a?b#c"` → scheme `https`, host `example.com`, path `/a`
    /// - `"example.com/path"` → no scheme, no host, path `example.com/path`
    /// - `"http://[::1"` → `UrlParseErrorKind::MissingBracket`
    pub fn parse(raw: &str) -> Result<Self, UrlParseError> {
        parse::parse(raw)
    }

    /// True if the URL has a scheme.
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Rootless part after the scheme, e.g. `user@example.com` in `mailto:user@example.com`.
    pub fn opaque(&self) -> Option<&str> {
        self.opaque.as_deref()
    }

    pub fn userinfo(&self) -> Option<&str> {
        self.authority.as_ref()?.userinfo.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.authority.as_ref().map(|a| a.host.as_str())
    }

    pub fn port(&self) -> Option<&str> {
        self.authority.as_ref()?.port.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns a copy with `scheme` set. `scheme` is lowercased.
    pub fn with_scheme(&self, scheme: &str) -> Self {
        Self {
            scheme: Some(scheme.to_ascii_lowercase()),
            ..self.clone()
        }
    }

    /// Returns a copy with the default `https` scheme if this URL has none.
    /// Absolute URLs are returned unchanged.
    ///
    /// Only the scheme is filled in. A host-less absolute path such as `/docs`
    /// stays host-less and renders as `https:/docs`; `example.com/docs` and
    /// `//example.com/docs` both render as `https://example.com/docs`.
    pub fn normalize(&self) -> Self {
        self.normalize_with(DEFAULT_SCHEME)
    }

    /// Like [`normalize`](Self::normalize) with a caller-chosen default scheme.
    pub fn normalize_with(&self, default_scheme: &str) -> Self {
        if self.is_absolute() {
            self.clone()
        } else {
            self.with_scheme(default_scheme)
        }
    }
}

/// True if `s` is a syntactically valid scheme: a letter followed by letters,
/// digits, `+`, `-` or `.`.
pub fn is_valid_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(opaque) = &self.opaque {
            f.write_str(opaque)?;
        } else {
            if self.scheme.is_some() || self.authority.is_some() {
                // A schemeless-then-defaulted `example.com/path` renders as
                // `https://example.com/path`.
                let rootless = !self.path.is_empty() && !self.path.starts_with('/');
                if self.authority.is_some() || rootless {
                    f.write_str("//")?;
                }
                if let Some(authority) = &self.authority {
                    write!(f, "{authority}")?;
                }
            }
            let has_host = self.host().is_some_and(|h| !h.is_empty());
            if has_host && !self.path.is_empty() && !self.path.starts_with('/') {
                f.write_str("/")?;
            }
            f.write_str(&self.path)?;
        }
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user) = &self.userinfo {
            write!(f, "{user}@")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = &self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl FromStr for TargetUrl {
    type Err = UrlParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&url::Url> for TargetUrl {
    type Error = UrlParseError;

    fn try_from(url: &url::Url) -> Result<Self, Self::Error> {
        Self::parse(url.as_str())
    }
}
