//! Maps a decoded request path onto the content root.

use std::path::{Component, Path, PathBuf};

use tokio::io::AsyncReadExt;

use crate::http::error::RequestError;
use crate::http::writer::CHUNK_SIZE;

pub const INDEX_HTML: &str = "index.html";
pub const INDEX_HTM: &str = "index.htm";

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// A directory without an index file; answered with a navigation page.
    Directory { path: PathBuf },
    /// A regular file, or the index file of a directory.
    File { path: PathBuf, is_binary: bool },
    NotFound,
}

/// Strips one trailing `/`, unless the path is the root itself.
pub fn trim_trailing_slash(uri: &str) -> &str {
    if uri != "/" {
        uri.strip_suffix('/').unwrap_or(uri)
    } else {
        uri
    }
}

/// Joins `uri` onto `root`, refusing paths whose `..` segments would climb
/// above `root`.
pub fn join_within(root: &Path, uri: &str) -> Result<PathBuf, RequestError> {
    let mut target = root.to_path_buf();
    let mut depth = 0usize;

    for component in Path::new(uri.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => {
                target.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir if depth > 0 => {
                target.pop();
                depth -= 1;
            }
            _ => return Err(RequestError::PathEscapesRoot),
        }
    }

    Ok(target)
}

/// Resolves a decoded request path against `root`.
///
/// Directories are checked for `index.html` and then `index.htm`, matched
/// case-sensitively; the first one found is served as a file.
pub async fn resolve(root: &Path, uri: &str) -> Result<ResolvedTarget, RequestError> {
    if !uri.starts_with('/') {
        return Err(RequestError::MissingLeadingSlash);
    }

    let target = join_within(root, trim_trailing_slash(uri))?;

    let Ok(meta) = tokio::fs::metadata(&target).await else {
        return Ok(ResolvedTarget::NotFound);
    };

    if meta.is_dir() {
        return Ok(match find_index(&target).await {
            Some(index) => ResolvedTarget::File {
                is_binary: is_binary(&index).await,
                path: index,
            },
            None => ResolvedTarget::Directory { path: target },
        });
    }

    if meta.is_file() {
        return Ok(ResolvedTarget::File {
            is_binary: is_binary(&target).await,
            path: target,
        });
    }

    Ok(ResolvedTarget::NotFound)
}

async fn find_index(dir: &Path) -> Option<PathBuf> {
    let mut entries = tokio::fs::read_dir(dir).await.ok()?;
    let mut has_html = false;
    let mut has_htm = false;

    while let Ok(Some(entry)) = entries.next_entry().await {
        // Follows symlinks, unlike `DirEntry::file_type`
        let is_file = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }
        match entry.file_name().to_str() {
            Some(INDEX_HTML) => has_html = true,
            Some(INDEX_HTM) => has_htm = true,
            _ => {}
        }
    }

    if has_html {
        Some(dir.join(INDEX_HTML))
    } else if has_htm {
        Some(dir.join(INDEX_HTM))
    } else {
        None
    }
}

/// Sniffs the first block of a file: text when it is valid UTF-8 and holds
/// no NUL byte. A sequence cut off by the block boundary (not by the end of
/// the file) still counts as text.
pub async fn is_binary(path: &Path) -> bool {
    let Ok(file) = tokio::fs::File::open(path).await else {
        return true;
    };

    let mut sample = Vec::with_capacity(CHUNK_SIZE);
    if file
        .take(CHUNK_SIZE as u64)
        .read_to_end(&mut sample)
        .await
        .is_err()
    {
        return true;
    }

    if sample.contains(&0) {
        return true;
    }

    match std::str::from_utf8(&sample) {
        Ok(_) => false,
        Err(e) => e.error_len().is_some() || sample.len() < CHUNK_SIZE,
    }
}
