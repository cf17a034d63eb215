//! rawhttp - Minimal HTTP/1.1 client
//!
//! Core library: URL resolution, hand-built requests, raw response parsing
//! and the connect/send/receive/close cycle that ties them together.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;

pub use client::HttpClient;
pub use config::Config;
pub use error::{ClientError, Stage};
pub use http::request::{Method, RequestArgs};
pub use http::response::HttpResponse;
