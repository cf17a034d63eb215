//! URL resolution into the (host, port, path) triple a request is sent to.

use crate::error::ClientError;

/// Default port for plain HTTP and any scheme other than `https`.
pub const DEFAULT_HTTP_PORT: u16 = 80;
/// Default port for `https` URLs.
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// Where a single request goes.
///
/// `path` is never empty and carries any query string from the input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub host: String,
    pub port: u16,
    pub path: String,
}

/// Parses `input` into host, port and path without touching the network.
///
/// # Example
///
/// ```
/// # use rawhttp::http::resolver::resolve;
/// let target = resolve("https://example.com").unwrap();
/// assert_eq!(target.host, "example.com");
/// assert_eq!(target.port, 443);
/// assert_eq!(target.path, "/");
/// ```
pub fn resolve(input: &str) -> Result<ParsedUrl, ClientError> {
    let url = url::Url::parse(input)
        .map_err(|e| ClientError::MalformedUrl(format!("{input}: {e}")))?;

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ClientError::MalformedUrl(format!("{input}: missing host")))?;

    let raw = split_authority(input);

    // `Url::port` hides a written port that equals the scheme's known default.
    let explicit_port = raw.is_some_and(|(authority, _)| has_explicit_port(authority));
    let port = match url.port_or_known_default() {
        Some(port) if explicit_port => port,
        _ => match url.scheme() {
            "https" => DEFAULT_HTTPS_PORT,
            _ => DEFAULT_HTTP_PORT,
        },
    };

    let mut path = match raw {
        Some((_, target)) => target.split('#').next().unwrap_or_default().to_string(),
        None => {
            let mut target = url.path().to_string();
            if let Some(query) = url.query() {
                target.push('?');
                target.push_str(query);
            }
            target
        }
    };
    if !path.starts_with('/') {
        path.insert(0, '/');
    }

    Ok(ParsedUrl {
        host: host.to_string(),
        port,
        path,
    })
}

/// Splits `scheme://authority/rest` into the authority and everything after
/// it, exactly as written.
fn split_authority(input: &str) -> Option<(&str, &str)> {
    let (_, rest) = input.trim().split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(rest.split_at(end))
}

fn has_explicit_port(authority: &str) -> bool {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let after_host = match host_port.rfind(']') {
        Some(i) => &host_port[i + 1..],
        None => host_port,
    };
    after_host
        .split_once(':')
        .is_some_and(|(_, port)| !port.is_empty())
}
