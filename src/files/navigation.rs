//! Directory listings for directories without an index file.

use std::path::Path;

use anyhow::Context;
use tokio::io::AsyncWrite;

use crate::files::site::Site;
use crate::files::static_file::read_text;
use crate::http::request::Method;
use crate::http::response::{ResponseHeader, StatusCode};
use crate::http::writer::write_response;

pub const DIR_PLACEHOLDER: &str = "{{dir}}";
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";

const FOLDER_ICON: &str = "./img/folder.png";
const FILE_ICON: &str = "./img/file.png";

/// One row of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub href: String,
    pub is_dir: bool,
}

/// Lists the immediate children of `dir`: subdirectories first, then files,
/// each group sorted by name.
pub async fn list_children(dir: &Path, uri: &str) -> anyhow::Result<Vec<Entry>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("listing {}", dir.display()))?;

    let mut children = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = match tokio::fs::metadata(entry.path()).await {
            Ok(meta) => meta.is_dir(),
            Err(_) => entry.file_type().await?.is_dir(),
        };
        children.push(Entry {
            href: child_href(uri, &name),
            name,
            is_dir,
        });
    }

    children.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
    Ok(children)
}

/// Joins the directory URI and a child name, collapsing duplicate slashes.
/// Segments are percent-encoded so the link decodes back to the same path.
pub fn child_href(uri: &str, name: &str) -> String {
    let joined = format!("{}/{}", uri, name);
    let mut path = String::with_capacity(joined.len());
    for c in joined.chars() {
        if c == '/' && path.ends_with('/') {
            continue;
        }
        path.push(c);
    }
    encode_path(&path)
}

/// Link target of the `..` entry: the URI with its last segment removed
/// (the real parent, rather than the first segment of the URI).
pub fn parent_href(uri: &str) -> String {
    let trimmed = uri.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => encode_path(&trimmed[..idx]),
    }
}

fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Replaces `{{dir}}` and `{{content}}` in a single left-to-right pass, so
/// substituted text is never scanned for placeholders again.
pub fn fill_template(template: &str, dir: &str, content: &str) -> String {
    let mut page = String::with_capacity(template.len() + dir.len() + content.len());
    let mut rest = template;

    loop {
        let next = [(DIR_PLACEHOLDER, dir), (CONTENT_PLACEHOLDER, content)]
            .into_iter()
            .filter_map(|(placeholder, value)| rest.find(placeholder).map(|at| (at, placeholder, value)))
            .min_by_key(|(at, _, _)| *at);

        match next {
            Some((at, placeholder, value)) => {
                page.push_str(&rest[..at]);
                page.push_str(value);
                rest = &rest[at + placeholder.len()..];
            }
            None => {
                page.push_str(rest);
                return page;
            }
        }
    }
}

/// Renders the `{{content}}` fragment: the `..` entry followed by one item
/// per child.
pub fn render_items(uri: &str, children: &[Entry]) -> String {
    let mut html = item(FOLDER_ICON, &parent_href(uri), "..");
    for child in children {
        let icon = if child.is_dir { FOLDER_ICON } else { FILE_ICON };
        html.push_str(&item(icon, &child.href, &child.name));
    }
    html
}

fn item(icon: &str, href: &str, label: &str) -> String {
    format!(
        "<li><img src=\"{}\" alt=\"\"><a href=\"{}\">{}</a></li>\r\n",
        icon,
        escape(href),
        escape(label)
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Sends the navigation page for directory `dir`, requested as `uri`.
pub async fn send_navigation<W>(
    out: &mut W,
    site: &Site,
    method: &Method,
    dir: &Path,
    uri: &str,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let template = read_text(&site.navigation_template).await?;
    let children = list_children(dir, uri).await?;

    let page = fill_template(&template, &escape(uri), &render_items(uri, &children));

    let header = ResponseHeader::new(StatusCode::Ok, "text/html", page.len() as u64);
    write_response(out, method, &header, page.as_bytes()).await
}
