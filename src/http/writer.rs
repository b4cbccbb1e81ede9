use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::request::Method;
use crate::http::response::ResponseHeader;

/// Size of each block read from disk when streaming a file.
pub const CHUNK_SIZE: usize = 32 * 1024;

/// Writes `header` and, unless `method` is HEAD, `body`.
pub async fn write_response<W>(
    out: &mut W,
    method: &Method,
    header: &ResponseHeader,
    body: &[u8],
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(&header.to_bytes()).await?;
    if method.wants_body() {
        out.write_all(body).await?;
    }
    out.flush().await?;
    Ok(())
}

/// Writes `header`, then streams `file` in `CHUNK_SIZE` blocks unless
/// `method` is HEAD.
pub async fn write_streamed<W>(
    out: &mut W,
    method: &Method,
    header: &ResponseHeader,
    mut file: File,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(&header.to_bytes()).await?;

    if method.wants_body() {
        let mut buf = BytesMut::with_capacity(CHUNK_SIZE);
        loop {
            buf.clear();
            let n = file.read_buf(&mut buf).await?;
            if n == 0 {
                break;
            }
            out.write_all(&buf).await?;
        }
    }

    out.flush().await?;
    Ok(())
}
