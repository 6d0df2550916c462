use std::io;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::fs::{FileEntry, ResolvedTarget, resolve, send_file};
use crate::http::error_page::{HttpError, send_error};
use crate::http::listing;
use crate::http::parser::{TokenReader, read_request};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode, file_head};
use crate::http::writer::ResponseWriter;

/// One accepted connection, from the first read to the close.
///
/// `run` consumes the connection, so the stream is shut down and dropped
/// exactly once whichever way the request ends. Exactly one response is
/// written: a 200 or an error page, never both.
pub struct Connection<S> {
    stream: S,
    peer: String,
    config: Config,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Resolving(Request),
    Responding(Request, ResolvedTarget),
    Failed(HttpError),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: impl Into<String>, config: Config) -> Self {
        Self {
            stream,
            peer: peer.into(),
            config,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(mut self) {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let mut reader = TokenReader::new(&mut self.stream);
                    self.state = match read_request(&mut reader).await {
                        Ok(request) => ConnectionState::Resolving(request),
                        Err(e) => {
                            warn!(peer = %self.peer, "rejecting request: {}", e);
                            ConnectionState::Failed(e.http_error())
                        }
                    };
                }

                ConnectionState::Resolving(request) => {
                    let root = &self.config.root_directory;
                    self.state = match resolve(root, &request.path).await {
                        Ok(target) => ConnectionState::Responding(request, target),
                        Err(e) => {
                            error!(peer = %self.peer, path = %request.path, "filesystem error: {}", e);
                            ConnectionState::Failed(HttpError::InternalServerError)
                        }
                    };
                }

                ConnectionState::Responding(request, target) => {
                    let sent = match target {
                        ResolvedTarget::Directory {
                            entries, is_root, ..
                        } => self.send_listing(&request, &entries, is_root).await,
                        ResolvedTarget::RegularFile {
                            path,
                            file,
                            size,
                            mime_type,
                        } => {
                            self.send_regular_file(&request, &path, file, size, mime_type)
                                .await
                        }
                        ResolvedTarget::Missing => {
                            self.state = ConnectionState::Failed(HttpError::NotFound);
                            continue;
                        }
                        ResolvedTarget::Unreadable => {
                            self.state = ConnectionState::Failed(HttpError::Forbidden);
                            continue;
                        }
                    };

                    match sent {
                        Ok(bytes) => {
                            info!(
                                peer = %self.peer,
                                path = %request.path,
                                status = StatusCode::Ok.as_u16(),
                                bytes,
                                "GET"
                            );
                        }
                        Err(e) => {
                            // Part of the 200 may already be out; an error page
                            // cannot follow it, so the connection is just closed.
                            warn!(peer = %self.peer, path = %request.path, "response aborted: {}", e);
                        }
                    }
                }

                ConnectionState::Failed(err) => {
                    info!(peer = %self.peer, status = err.status().as_u16(), "error response");
                    send_error(&mut self.stream, err).await;
                }

                ConnectionState::Closed => break,
            }
        }

        if let Err(e) = self.stream.shutdown().await {
            debug!(peer = %self.peer, "shutdown failed: {}", e);
        }
    }

    /// Writes a 200 listing page and returns the body length.
    async fn send_listing(
        &mut self,
        request: &Request,
        entries: &[FileEntry],
        is_root: bool,
    ) -> io::Result<u64> {
        let html = listing::render(&request.path, entries, is_root);
        let response = Response::html(request.version, html);

        ResponseWriter::new(&response)
            .write_to_stream(&mut self.stream)
            .await?;
        Ok(response.body.len() as u64)
    }

    /// Writes the 200 head for a file, then streams its body.
    async fn send_regular_file(
        &mut self,
        request: &Request,
        path: &Path,
        file: File,
        size: u64,
        mime_type: &str,
    ) -> io::Result<u64> {
        let head = file_head(request.version, mime_type, size);

        ResponseWriter::head(&head)
            .write_to_stream(&mut self.stream)
            .await?;

        let sent = send_file(file, size, &mut self.stream).await?;
        if sent != size {
            warn!(path = ?path, expected = size, sent, "file shrank while sending");
        }
        Ok(sent)
    }
}
