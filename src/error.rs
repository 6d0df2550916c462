//! Process-level error types.
//!
//! Per-connection failures never show up here; they are turned into an
//! HTTP error page (see [`crate::http::error_page`]) or logged and dropped
//! inside the worker.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop the server as a whole.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be created. Start-up cannot proceed.
    #[error("failed to bind listening socket on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The accept call itself failed. The loop exits; workers already
    /// running keep going.
    #[error("listening socket shut down unexpectedly")]
    Accept(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("port {0} is outside the allowed range 1025-65535")]
    PortOutOfRange(u16),

    #[error("invalid port value {0:?}")]
    InvalidPort(String),

    #[error("cannot read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config file")]
    Yaml(#[from] serde_yaml::Error),
}
