//! HTTP protocol implementation.
//!
//! Only the request line of each request is read; every connection serves
//! exactly one request and is then closed.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine, from the socket read to the close
//! - **`parser`**: Extracts method, decoded path and version from the request line
//! - **`request`**: Request representation and method/version predicates
//! - **`response`**: Status codes and the response header block
//! - **`writer`**: Writes headers and bodies, whole or streamed in chunks
//! - **`mime`**: MIME type detection based on file extensions
//! - **`error`**: Request failures and the status code each maps to
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────┐
//!        │ AwaitRequest │ ← Single read, bounded by the idle timeout
//!        └──────┬───────┘
//!               │ Request line parsed        (parse failure → 400)
//!               ▼
//!        ┌──────────────┐
//!        │    Parsed    │ ← Method, leading slash, version checks
//!        └──────┬───────┘
//!               │ Valid                      (501 / 400 / 505, or /img icon)
//!               ▼
//!        ┌──────────────┐
//!        │  Validated   │ ← Resolve against the content root
//!        └──────┬───────┘
//!               ▼
//!        ┌──────────────┐
//!        │  Dispatched  │ ← Error page, file, or navigation page
//!        └──────┬───────┘
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fileserve::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! let listener = TcpListener::bind("127.0.0.1:8000").await?;
//! loop {
//!     let (socket, _addr) = listener.accept().await?;
//!     let site = Arc::clone(&site);
//!     tokio::spawn(async move {
//!         if let Err(e) = Connection::new(socket, site).run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     });
//! }
//! ```

pub mod connection;
pub mod error;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
