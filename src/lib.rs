//! fileserve - a small concurrent HTTP file server
//!
//! Answers `GET` requests with file contents or HTML directory listings
//! from a configured root, one request per connection.

pub mod config;
pub mod error;
pub mod fs;
pub mod http;
pub mod server;
