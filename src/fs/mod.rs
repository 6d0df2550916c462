//! Read-only access to the served directory tree.
//!
//! - **`resolve`**: maps a request target onto the root and classifies it
//! - **`sender`**: streams a file's bytes to the peer

pub mod resolve;
pub mod sender;

pub use resolve::{FileEntry, ResolvedTarget, resolve};
pub use sender::send_file;
