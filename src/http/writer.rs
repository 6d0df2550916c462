use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, ResponseHead};

/// Serialized response bytes plus how many of them reached the peer.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: response.to_bytes(),
            written: 0,
        }
    }

    /// Only the status line and headers; the caller streams the body.
    pub fn head(head: &ResponseHead) -> Self {
        Self {
            buffer: head.to_bytes(),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "connection closed while writing",
                ));
            }

            self.written += n;
        }

        stream.flush().await
    }
}
