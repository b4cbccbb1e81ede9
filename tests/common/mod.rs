#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fileserve::config::Config;
use fileserve::files::Site;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Scratch directory removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(tag: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "fileserve-{}-{}-{}",
            tag,
            std::process::id(),
            id
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let target = self.path.join(rel);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&target, contents).unwrap();
        target
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let target = self.path.join(rel);
        std::fs::create_dir_all(&target).unwrap();
        target
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub const NOT_FOUND_PAGE: &str = "<h1>not found</h1>";
pub const BAD_REQUEST_PAGE: &str = "<h1>bad request</h1>";
pub const NOT_IMPLEMENTED_PAGE: &str = "<h1>not implemented</h1>";
pub const VERSION_PAGE: &str = "<h1>version not supported</h1>";
pub const NAV_TEMPLATE: &str = "<h1>{{dir}}</h1><ul>{{content}}</ul>";

/// A server layout in a scratch directory: `web/` content root,
/// `templates/` and `img/` under the icon root.
pub struct Fixture {
    pub dir: TempDir,
    pub site: Arc<Site>,
}

impl Fixture {
    pub fn new(tag: &str) -> Self {
        let dir = TempDir::new(tag);
        dir.mkdir("web");
        dir.write("templates/bad_request.html", BAD_REQUEST_PAGE);
        dir.write("templates/not_found.html", NOT_FOUND_PAGE);
        dir.write("templates/not_implemented.html", NOT_IMPLEMENTED_PAGE);
        dir.write("templates/http_version_not_supported.html", VERSION_PAGE);
        dir.write("templates/navigation.html", NAV_TEMPLATE);
        dir.write("img/folder.png", [0x89u8, b'P', b'N', b'G', 0, 1, 2, 3]);

        let cfg = Config {
            content_root: dir.path().join("web"),
            templates_dir: dir.path().join("templates"),
            icon_root: dir.path().to_path_buf(),
            read_timeout_secs: 5,
            ..Config::default()
        };
        Self {
            dir,
            site: Arc::new(Site::from_config(&cfg)),
        }
    }

    pub fn web(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        self.dir.write(&format!("web/{}", rel), contents)
    }

    pub fn web_dir(&self, rel: &str) -> PathBuf {
        self.dir.mkdir(&format!("web/{}", rel))
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("web")
    }
}

/// Splits a raw response into its header block and body.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = String::from_utf8(raw[..end + 4].to_vec()).unwrap();
    (head, raw[end + 4..].to_vec())
}

pub fn header_value<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.split("\r\n").find_map(|line| {
        let (k, v) = line.split_once(": ")?;
        (k == name).then_some(v)
    })
}

pub fn status_line(head: &str) -> &str {
    head.split("\r\n").next().unwrap()
}
