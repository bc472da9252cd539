//! RFC 3986 reference parsing: scheme, authority, path, query, fragment.

use super::error::{UrlParseError, UrlParseErrorKind};
use super::{Authority, TargetUrl};

type Kind = UrlParseErrorKind;

pub(super) fn parse(input: &str) -> Result<TargetUrl, UrlParseError> {
    parse_reference(input).map_err(|kind| UrlParseError {
        input: input.to_string(),
        kind,
    })
}

fn parse_reference(input: &str) -> Result<TargetUrl, Kind> {
    if input.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return Err(Kind::InvalidControlCharacter);
    }

    let (rest, fragment) = match input.split_once('#') {
        Some((rest, frag)) => (rest, Some(frag)),
        None => (input, None),
    };
    if let Some(frag) = fragment {
        check_escapes(frag)?;
    }

    // Query escapes are left for the receiving server to interpret.
    let (rest, query) = match rest.split_once('?') {
        Some((rest, q)) => (rest, Some(q)),
        None => (rest, None),
    };

    let (scheme, rest) = split_scheme(rest)?;
    let mut url = TargetUrl {
        scheme: scheme.map(|s| s.to_ascii_lowercase()),
        opaque: None,
        authority: None,
        path: String::new(),
        query: query.map(str::to_string),
        fragment: fragment.map(str::to_string),
    };

    if !rest.starts_with('/') {
        if url.scheme.is_some() {
            // Rootless paths after a scheme (mailto:, data:) are kept opaque and unchecked.
            if !rest.is_empty() {
                url.opaque = Some(rest.to_string());
            }
            return Ok(url);
        }
        let first_segment = rest.split('/').next().unwrap_or_default();
        if first_segment.contains(':') {
            return Err(Kind::ColonInFirstSegment);
        }
    }

    let mut rest = rest;
    if (url.scheme.is_some() || !rest.starts_with("///")) && rest.starts_with("//") {
        let after_slashes = &rest[2..];
        let (authority, path) = match after_slashes.find('/') {
            Some(i) => after_slashes.split_at(i),
            None => (after_slashes, ""),
        };
        url.authority = Some(parse_authority(authority)?);
        rest = path;
    }

    check_escapes(rest)?;
    url.path = rest.to_string();
    Ok(url)
}

/// Splits a leading `scheme:` off `raw`. A string whose first `:` is preceded
/// by anything but scheme characters has no scheme.
fn split_scheme(raw: &str) -> Result<(Option<&str>, &str), Kind> {
    for (i, c) in raw.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {}
            '0'..='9' | '+' | '-' | '.' => {
                if i == 0 {
                    return Ok((None, raw));
                }
            }
            ':' => {
                if i == 0 {
                    return Err(Kind::MissingScheme);
                }
                return Ok((Some(&raw[..i]), &raw[i + 1..]));
            }
            _ => return Ok((None, raw)),
        }
    }
    Ok((None, raw))
}

fn parse_authority(raw: &str) -> Result<Authority, Kind> {
    let (userinfo, hostport) = match raw.rfind('@') {
        Some(i) => (Some(&raw[..i]), &raw[i + 1..]),
        None => (None, raw),
    };
    if let Some(user) = userinfo {
        check_escapes(user)?;
    }

    let (host, port) = if hostport.starts_with('[') {
        let close = hostport.find(']').ok_or(Kind::MissingBracket)?;
        let tail = &hostport[close + 1..];
        let port = match tail.strip_prefix(':') {
            Some(p) => Some(p),
            None if tail.is_empty() => None,
            None => return Err(Kind::InvalidPort(tail.to_string())),
        };
        (&hostport[..=close], port)
    } else {
        match hostport.rfind(':') {
            Some(i) => (&hostport[..i], Some(&hostport[i + 1..])),
            None => (hostport, None),
        }
    };

    if let Some(p) = port {
        if !p.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Kind::InvalidPort(format!(":{p}")));
        }
    }
    check_host(host)?;

    Ok(Authority {
        userinfo: userinfo.map(str::to_string),
        host: host.to_string(),
        port: port.map(str::to_string),
    })
}

fn check_host(host: &str) -> Result<(), Kind> {
    let inner = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    let bracketed = inner.len() != host.len();
    for c in inner.chars() {
        let ok = c.is_ascii_alphanumeric()
            || !c.is_ascii()
            || "-._~!$&'()*+,;=%".contains(c)
            || (bracketed && c == ':');
        if !ok {
            return Err(Kind::InvalidHost(c.to_string()));
        }
    }
    check_escapes(inner)
}

/// Every `%` must introduce two hex digits.
fn check_escapes(s: &str) -> Result<(), Kind> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(Kind::InvalidEscape(
                    String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                ));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
