//! HTTP protocol implementation.
//!
//! A deliberately small subset of HTTP/1.x: one request line per
//! connection, `GET` only, and the connection is closed after the response.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection state machine
//! - **`parser`**: tokenizes and validates the request line
//! - **`request`**: request line representation
//! - **`response`**: status codes, response heads and in-memory responses
//! - **`writer`**: writes serialized responses to the peer
//! - **`mime`**: content type detection from file extensions
//! - **`listing`**: HTML directory listings
//! - **`error_page`**: the error taxonomy and its HTML pages
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read METHOD, TARGET, VERSION tokens
//!        └──────┬──────┘
//!               │ Request line valid          (invalid → Failed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolving     │ ← Look the target up under the root
//!        └──────┬───────────┘
//!               │ Directory or file           (fs fault → Failed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Responding     │ ← Listing page or file stream
//!        └──────┬───────────┘               (missing/unreadable → Failed)
//!               │
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Failed sends its error page first
//!        └──────────────────┘
//! ```

pub mod connection;
pub mod error_page;
pub mod listing;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
