//! Error types for URL parsing.

/// Input string could not be parsed as a URL reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse {input:?}: {kind}")]
pub struct UrlParseError {
    pub input: String,
    pub kind: UrlParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlParseErrorKind {
    /// `%` not followed by two hex digits.
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),
    /// ASCII control character (including NUL and DEL) anywhere in the input.
    #[error("invalid control character in URL")]
    InvalidControlCharacter,
    /// Input starts with `:`.
    #[error("missing protocol scheme")]
    MissingScheme,
    /// Relative reference whose first segment looks like a malformed scheme.
    #[error("first path segment in URL cannot contain colon")]
    ColonInFirstSegment,
    /// IPv6 literal opened with `[` but never closed.
    #[error("missing ']' in host")]
    MissingBracket,
    #[error("invalid character {0:?} in host name")]
    InvalidHost(String),
    #[error("invalid port {0:?} after host")]
    InvalidPort(String),
}
