use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWrite;
use tracing::warn;

use crate::files::static_file::read_text;
use crate::files::site::Site;
use crate::http::request::Method;
use crate::http::response::{ResponseHeader, StatusCode};
use crate::http::writer::write_response;

/// Error status to template file lookup.
#[derive(Debug, Clone)]
pub struct ErrorPages {
    templates: HashMap<StatusCode, PathBuf>,
}

impl ErrorPages {
    pub fn in_dir(dir: &Path) -> Self {
        let templates = HashMap::from([
            (StatusCode::BadRequest, dir.join("bad_request.html")),
            (StatusCode::NotFound, dir.join("not_found.html")),
            (StatusCode::NotImplemented, dir.join("not_implemented.html")),
            (
                StatusCode::VersionNotSupported,
                dir.join("http_version_not_supported.html"),
            ),
        ]);
        Self { templates }
    }

    pub fn template(&self, status: StatusCode) -> Option<&Path> {
        self.templates.get(&status).map(PathBuf::as_path)
    }
}

/// Sends the error page for `status`.
///
/// HEAD gets the header alone; GET and any unsupported method get the page
/// body too. A template that cannot be read is replaced by a one-line page.
pub async fn send_error<W>(
    out: &mut W,
    site: &Site,
    method: &Method,
    status: StatusCode,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let body = match site.error_pages.template(status) {
        Some(path) => match read_text(path).await {
            Ok(text) => text,
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "Error page template unavailable");
                fallback_page(status)
            }
        },
        None => anyhow::bail!("no error page for status {}", status.as_u16()),
    };

    let header = ResponseHeader::new(status, "text/html", body.len() as u64);
    write_response(out, method, &header, body.as_bytes()).await
}

fn fallback_page(status: StatusCode) -> String {
    format!(
        "<html><body><h1>{} {}</h1></body></html>",
        status.as_u16(),
        status.reason_phrase()
    )
}
