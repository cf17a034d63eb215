//! HTTP/1.1 protocol pieces of the client.
//!
//! Nothing in here performs I/O. The request side turns a URL and arguments
//! into wire bytes; the response side turns the bytes read until the peer
//! closed the connection back into a status code and body.
//!
//! # Architecture
//!
//! - **`resolver`**: Splits a URL into host, port and path, with scheme-based port defaults
//! - **`request`**: Method, ordered request arguments and the outgoing request representation
//! - **`writer`**: Serializes GET and POST requests to bytes
//! - **`parser`**: Splits a raw response at the blank line and reads the status code
//! - **`response`**: The status code and body returned to the caller
//!
//! # Wire format
//!
//! ```text
//! GET /x?a=1&b=2& HTTP/1.1\r\n          POST /x HTTP/1.1\r\n
//! Host: example.com\r\n                 Host: example.com\r\n
//! Connection: close\r\n                 Connection: close\r\n
//! \r\n                                  Content-Type: application/x-www-form-urlencoded\r\n
//!                                       Content-Length: 8\r\n
//!                                       \r\n
//!                                       a=1&b=2&
//! ```
//!
//! Keys and values are not percent-encoded and the trailing `&` is kept.

pub mod parser;
pub mod request;
pub mod resolver;
pub mod response;
pub mod writer;
