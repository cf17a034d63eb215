//! Error types for the HTTP client.

use std::time::Duration;

/// Step of the request lifecycle an I/O failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Connect,
    Send,
    Receive,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Connect => "connect",
            Stage::Send => "send",
            Stage::Receive => "receive",
        };
        f.write_str(name)
    }
}

/// Errors returned by every client operation.
///
/// Nothing is retried internally; each variant propagates straight to the
/// caller.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The URL could not be resolved to a host, port and path.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),

    /// Transport-level failure while connecting, sending or receiving.
    #[error("connection error during {stage}: {source}")]
    Connection {
        stage: Stage,
        #[source]
        source: std::io::Error,
    },

    /// The response bytes lack the header terminator or a usable status line.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A configured connect or I/O timeout elapsed.
    #[error("{stage} timed out after {after:?}")]
    Timeout { stage: Stage, after: Duration },
}

impl ClientError {
    pub fn connection(stage: Stage, source: std::io::Error) -> Self {
        ClientError::Connection { stage, source }
    }
}
