//! Byte transport underneath the client.
//!
//! The client only needs four things from the network: open a connection,
//! write a request, read until the peer closes, and release the connection.
//! [`Transport`] and [`Connection`] capture exactly that, so the orchestrator
//! can run against an in-memory transport in tests.

pub mod tcp;

pub use tcp::{TcpConnection, TcpTransport};

use crate::error::ClientError;

/// Opens connections to `host:port`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type Conn: Connection;

    async fn connect(&self, host: &str, port: u16) -> Result<Self::Conn, ClientError>;
}

/// A single-use connection owned by exactly one request.
#[allow(async_fn_in_trait)]
pub trait Connection {
    /// Writes every byte of `bytes`.
    async fn send(&mut self, bytes: &[u8]) -> Result<(), ClientError>;

    /// Reads until the peer closes the stream (a zero-length read).
    async fn receive_all(&mut self) -> Result<Vec<u8>, ClientError>;

    /// Releases the connection. Failures are swallowed.
    async fn close(self);
}
