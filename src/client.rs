//! Request orchestration.
//!
//! Every call walks the same state machine:
//!
//! ```text
//!   Resolving ──► Connecting ──► Sending ──► Receiving ──► Parsing
//!       │              │            │            │            │
//!       │ error        │ error      └────────────┴────────────┤ ok or error
//!       ▼              ▼                                      ▼
//!     caller         caller                                 Closed ──► caller
//! ```
//!
//! Once a connection exists, every path ends in `Closed`, which releases the
//! connection exactly once before the outcome is returned.

use tracing::{debug, info, trace};

use crate::config::Config;
use crate::error::ClientError;
use crate::http::parser::parse_response;
use crate::http::request::{Method, RequestArgs};
use crate::http::resolver::{ParsedUrl, resolve};
use crate::http::response::HttpResponse;
use crate::http::writer::build_request;
use crate::transport::{Connection, TcpTransport, Transport};

enum RequestState<C> {
    Resolving,
    Connecting(ParsedUrl),
    Sending { conn: C, request: Vec<u8> },
    Receiving { conn: C },
    Parsing { conn: C, raw: Vec<u8> },
    Closed {
        conn: C,
        outcome: Result<HttpResponse, ClientError>,
    },
}

/// HTTP/1.1 client that builds and parses every byte itself.
///
/// Holds no connection between calls; each request dials, uses and closes its
/// own connection.
#[derive(Debug, Clone, Default)]
pub struct HttpClient<T = TcpTransport> {
    transport: T,
}

impl HttpClient<TcpTransport> {
    pub fn new(config: &Config) -> Self {
        Self::with_transport(TcpTransport::new(config.transport.clone()))
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub async fn get(&self, url: &str, args: &RequestArgs) -> Result<HttpResponse, ClientError> {
        self.request(Method::Get, url, args).await
    }

    pub async fn post(&self, url: &str, args: &RequestArgs) -> Result<HttpResponse, ClientError> {
        self.request(Method::Post, url, args).await
    }

    /// Dispatches on a raw method token. Unknown tokens fall back to GET.
    pub async fn command(
        &self,
        url: &str,
        method: &str,
        args: &RequestArgs,
    ) -> Result<HttpResponse, ClientError> {
        self.request(Method::from_token(method), url, args).await
    }

    /// Runs one full request lifecycle.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        args: &RequestArgs,
    ) -> Result<HttpResponse, ClientError> {
        let outcome = self.run(method, url, args).await;

        match &outcome {
            Ok(response) => info!(
                %method,
                url,
                status = response.status_code,
                "Request completed"
            ),
            Err(e) => debug!(%method, url, error = %e, "Request failed"),
        }

        outcome
    }

    async fn run(
        &self,
        method: Method,
        url: &str,
        args: &RequestArgs,
    ) -> Result<HttpResponse, ClientError> {
        let mut state = RequestState::Resolving;

        loop {
            state = match state {
                RequestState::Resolving => RequestState::Connecting(resolve(url)?),

                RequestState::Connecting(target) => {
                    debug!(
                        %method,
                        host = %target.host,
                        port = target.port,
                        path = %target.path,
                        "Connecting"
                    );
                    let conn = self.transport.connect(&target.host, target.port).await?;
                    let request = build_request(method, &target.host, &target.path, args);
                    RequestState::Sending { conn, request }
                }

                RequestState::Sending { mut conn, request } => {
                    match conn.send(&request).await {
                        Ok(()) => {
                            trace!(bytes = request.len(), "Request sent");
                            RequestState::Receiving { conn }
                        }
                        Err(e) => RequestState::Closed {
                            conn,
                            outcome: Err(e),
                        },
                    }
                }

                RequestState::Receiving { mut conn } => match conn.receive_all().await {
                    Ok(raw) => {
                        trace!(bytes = raw.len(), "Response received");
                        RequestState::Parsing { conn, raw }
                    }
                    Err(e) => RequestState::Closed {
                        conn,
                        outcome: Err(e),
                    },
                },

                RequestState::Parsing { conn, raw } => RequestState::Closed {
                    conn,
                    outcome: parse_response(&raw),
                },

                RequestState::Closed { conn, outcome } => {
                    conn.close().await;
                    return outcome;
                }
            };
        }
    }
}
