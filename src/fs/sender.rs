use std::io;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Copy buffer size for file bodies.
pub const BUFFER_SIZE: usize = 8192;

/// Streams at most `limit` bytes of `file` to `out` and flushes once at
/// the end.
///
/// `limit` is the length already promised in `Content-Length`; bytes the
/// file gained since then are not sent. Takes the file by value so the
/// handle is closed on every return path. Returns the number of bytes
/// copied. Writes no headers.
pub async fn send_file<W>(file: File, limit: u64, out: &mut W) -> io::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut file = file.take(limit);
    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut total = 0u64;

    loop {
        let n = file.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        out.write_all(&buffer[..n]).await?;
        total += n as u64;
    }

    out.flush().await?;
    Ok(total)
}
