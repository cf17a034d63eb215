//! TCP transport over tokio sockets.

use std::future::Future;
use std::io;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::TransportConfig;
use crate::error::{ClientError, Stage};
use crate::transport::{Connection, Transport};

/// Dials plain TCP connections with the configured timeouts.
#[derive(Debug, Clone, Default)]
pub struct TcpTransport {
    config: TransportConfig,
}

impl TcpTransport {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }
}

impl Transport for TcpTransport {
    type Conn = TcpConnection;

    async fn connect(&self, host: &str, port: u16) -> Result<TcpConnection, ClientError> {
        // IPv6 literals arrive bracketed from the URL.
        let dial_host = host.trim_start_matches('[').trim_end_matches(']');

        let stream = bounded(
            Stage::Connect,
            self.config.connect_timeout(),
            TcpStream::connect((dial_host, port)),
        )
        .await?;

        tracing::trace!(host = dial_host, port, "Connected");

        Ok(TcpConnection {
            stream,
            io_timeout: self.config.io_timeout(),
            read_chunk_size: self.config.read_chunk_size,
        })
    }
}

pub struct TcpConnection {
    stream: TcpStream,
    io_timeout: Option<Duration>,
    read_chunk_size: usize,
}

impl Connection for TcpConnection {
    async fn send(&mut self, bytes: &[u8]) -> Result<(), ClientError> {
        let stream = &mut self.stream;
        bounded(Stage::Send, self.io_timeout, async move {
            stream.write_all(bytes).await?;
            stream.flush().await
        })
        .await
    }

    async fn receive_all(&mut self) -> Result<Vec<u8>, ClientError> {
        let mut buffer = BytesMut::with_capacity(self.read_chunk_size);
        let mut chunk = vec![0u8; self.read_chunk_size];

        loop {
            let n = bounded(Stage::Receive, self.io_timeout, self.stream.read(&mut chunk)).await?;

            if n == 0 {
                // Peer closed the connection
                break;
            }

            buffer.extend_from_slice(&chunk[..n]);
            tracing::trace!(bytes = n, total = buffer.len(), "Read chunk");
        }

        Ok(buffer.into())
    }

    async fn close(mut self) {
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(error = %e, "Ignoring error while closing connection");
        }
    }
}

/// Runs an I/O step, bounding it by `limit` when one is set.
async fn bounded<T>(
    stage: Stage,
    limit: Option<Duration>,
    step: impl Future<Output = io::Result<T>>,
) -> Result<T, ClientError> {
    let result = match limit {
        Some(after) => timeout(after, step)
            .await
            .map_err(|_| ClientError::Timeout { stage, after })?,
        None => step.await,
    };

    result.map_err(|e| ClientError::connection(stage, e))
}
