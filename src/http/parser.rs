use std::io;

use bytes::{Buf, BytesMut};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::error_page::HttpError;
use crate::http::request::{Method, Request, Version};

/// Longest token accepted on the request line.
pub const MAX_TOKEN_LEN: usize = 8192;

const READ_CHUNK: usize = 4096;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("request line ended before all tokens were read")]
    MissingToken,
    #[error("request line token is not valid UTF-8")]
    InvalidToken,
    #[error("request line token longer than {} bytes", MAX_TOKEN_LEN)]
    TokenTooLong,
    #[error("unsupported protocol version {0:?}")]
    UnsupportedVersion(String),
    #[error("method {} is not implemented", .0.as_str())]
    NotImplemented(Method),
    #[error("failed to read request")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// The error page this failure is answered with.
    pub fn http_error(&self) -> HttpError {
        match self {
            ParseError::MissingToken
            | ParseError::InvalidToken
            | ParseError::TokenTooLong
            | ParseError::UnsupportedVersion(_) => HttpError::BadRequest,
            ParseError::NotImplemented(_) => HttpError::NotImplemented,
            ParseError::Io(_) => HttpError::InternalServerError,
        }
    }
}

/// Splits an inbound byte stream into whitespace-delimited tokens.
///
/// Reads only as much as it needs to produce the next token, so whatever
/// follows the request line (headers, body) is left mostly unread.
pub struct TokenReader<R> {
    inner: R,
    buffer: BytesMut,
    eof: bool,
}

impl<R: AsyncRead + Unpin> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            eof: false,
        }
    }

    /// Returns the next token, or `None` once the stream ends with nothing
    /// but whitespace left.
    pub async fn next_token(&mut self) -> Result<Option<String>, ParseError> {
        loop {
            let leading = self
                .buffer
                .iter()
                .take_while(|b| b.is_ascii_whitespace())
                .count();
            self.buffer.advance(leading);

            if let Some(end) = self.buffer.iter().position(|b| b.is_ascii_whitespace()) {
                if end > MAX_TOKEN_LEN {
                    return Err(ParseError::TokenTooLong);
                }
                let token = self.buffer.split_to(end);
                return decode(&token).map(Some);
            }

            if self.buffer.len() > MAX_TOKEN_LEN {
                return Err(ParseError::TokenTooLong);
            }

            if self.eof {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let token = self.buffer.split();
                return decode(&token).map(Some);
            }

            self.fill().await?;
        }
    }

    async fn fill(&mut self) -> Result<(), ParseError> {
        self.buffer.reserve(READ_CHUNK);
        let n = self.inner.read_buf(&mut self.buffer).await?;
        if n == 0 {
            self.eof = true;
        }
        Ok(())
    }
}

fn decode(token: &[u8]) -> Result<String, ParseError> {
    std::str::from_utf8(token)
        .map(str::to_owned)
        .map_err(|_| ParseError::InvalidToken)
}

/// Reads and validates one request line.
///
/// The method is checked as soon as it is read; a non-GET request is
/// rejected without reading the rest of the line.
pub async fn read_request<R>(reader: &mut TokenReader<R>) -> Result<Request, ParseError>
where
    R: AsyncRead + Unpin,
{
    let method = reader.next_token().await?.ok_or(ParseError::MissingToken)?;
    let method = Method::from_token(&method);
    if method != Method::GET {
        return Err(ParseError::NotImplemented(method));
    }

    let path = reader.next_token().await?.ok_or(ParseError::MissingToken)?;
    let version = reader.next_token().await?.ok_or(ParseError::MissingToken)?;
    let version =
        Version::from_token(&version).ok_or(ParseError::UnsupportedVersion(version))?;

    Ok(Request {
        method,
        path,
        version,
    })
}
