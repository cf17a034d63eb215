use crate::error::ClientError;
use crate::http::response::HttpResponse;

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Splits a raw response on the first blank line.
///
/// The header block must be UTF-8; the body is decoded lossily so a binary
/// payload does not fail the request.
pub fn split_header_body(raw: &[u8]) -> Result<(String, String), ClientError> {
    let headers_end = find_headers_end(raw).ok_or_else(|| {
        ClientError::MalformedResponse("missing header terminator".to_string())
    })?;

    let header = std::str::from_utf8(&raw[..headers_end])
        .map_err(|_| ClientError::MalformedResponse("header block is not UTF-8".to_string()))?;
    let body = String::from_utf8_lossy(&raw[headers_end + HEADER_TERMINATOR.len()..]);

    Ok((header.to_string(), body.into_owned()))
}

/// Reads the status code from the second space-separated token of the status line.
pub fn extract_status_code(header: &str) -> Result<u16, ClientError> {
    let status_line = header.split("\r\n").next().unwrap_or_default();

    let code = status_line.split(' ').nth(1).ok_or_else(|| {
        ClientError::MalformedResponse(format!("invalid status line: {status_line:?}"))
    })?;

    code.parse::<u16>()
        .map_err(|_| ClientError::MalformedResponse(format!("invalid status code: {code:?}")))
}

/// Parses a complete response read until the peer closed the connection.
pub fn parse_response(raw: &[u8]) -> Result<HttpResponse, ClientError> {
    let (header, body) = split_header_body(raw)?;
    let status_code = extract_status_code(&header)?;
    Ok(HttpResponse::new(status_code, body))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_TERMINATOR.len())
        .position(|w| w == HEADER_TERMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_ok() {
        let raw = b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nhi";

        let parsed = parse_response(raw).unwrap();

        assert_eq!(parsed.status_code, 200);
        assert_eq!(parsed.body, "hi");
    }

    #[test]
    fn find_headers_end_picks_first_terminator() {
        assert_eq!(find_headers_end(b"a\r\n\r\nb\r\n\r\n"), Some(1));
        assert_eq!(find_headers_end(b"\r\n\r"), None);
    }
}
