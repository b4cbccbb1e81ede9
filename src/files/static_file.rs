use std::path::Path;

use anyhow::Context;
use tokio::io::AsyncWrite;

use crate::files::site::Site;
use crate::http::request::Method;
use crate::http::response::{ResponseHeader, StatusCode};
use crate::http::writer::{write_response, write_streamed};

/// Reads a UTF-8 file and joins its lines with CRLF.
pub async fn read_text(path: &Path) -> anyhow::Result<String> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let text = String::from_utf8(raw)
        .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
    Ok(text.lines().collect::<Vec<_>>().join("\r\n"))
}

/// Sends a text file in one write.
///
/// Falls back to the binary sender when the file does not decode as UTF-8.
pub async fn send_text<W>(out: &mut W, site: &Site, method: &Method, path: &Path) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let content = match read_text(path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Falling back to binary transfer");
            return send_binary(out, site, method, path).await;
        }
    };

    let content_type = site.content_types.resolve(path);
    let header = ResponseHeader::new(StatusCode::Ok, content_type, content.len() as u64);
    write_response(out, method, &header, content.as_bytes()).await
}

/// Sends a file as-is, streamed from disk in fixed-size chunks.
pub async fn send_binary<W>(out: &mut W, site: &Site, method: &Method, path: &Path) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("opening {}", path.display()))?;
    let size = file.metadata().await?.len();

    let content_type = site.content_types.resolve(path);
    let header = ResponseHeader::new(StatusCode::Ok, content_type, size);
    write_streamed(out, method, &header, file).await
}
