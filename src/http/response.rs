use std::fmt;

/// The result of one request: status code and body text.
///
/// Only the status line and the bytes after the header terminator are kept;
/// every other header is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric status from the status line (e.g. 200, 404)
    pub status_code: u16,
    /// Everything after the first blank line
    pub body: String,
}

impl HttpResponse {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status code: {}\nbody: {}", self.status_code, self.body)
    }
}
