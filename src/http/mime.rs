use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Extension to MIME type lookup, built once at startup.
#[derive(Debug, Clone)]
pub struct ContentTypes {
    by_extension: HashMap<&'static str, &'static str>,
}

impl Default for ContentTypes {
    fn default() -> Self {
        let by_extension = HashMap::from([
            (".json", "text/json"),
            (".html", "text/html"),
            (".htm", "text/html"),
            (".css", "text/css"),
            (".mp3", "audio/mpeg"),
            (".wav", "audio/wav"),
            (".mp4", "video/mp4"),
            (".png", "image/png"),
            (".gif", "image/gif"),
            (".jpeg", "image/jpeg"),
            (".jpg", "image/jpeg"),
            (".pdf", "application/pdf"),
        ]);
        Self { by_extension }
    }
}

impl ContentTypes {
    /// Resolves the MIME type of `path`, falling back to `text/plain`.
    pub fn resolve(&self, path: impl AsRef<Path>) -> &'static str {
        let path = path.as_ref().to_string_lossy();
        extension(&path)
            .and_then(|ext| self.by_extension.get(ext).copied())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

/// Extracts the trailing `.ext` (dot included), ignoring one trailing slash.
///
/// The extension must consist of lowercase ASCII letters and digits only.
pub fn extension(path: &str) -> Option<&str> {
    let path = path.strip_suffix('/').unwrap_or(path);
    let dot = path.rfind('.')?;
    let ext = &path[dot..];
    ext[1..]
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        .then_some(ext)
}
