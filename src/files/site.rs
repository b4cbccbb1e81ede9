use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::files::error_page::ErrorPages;
use crate::http::mime::ContentTypes;

pub const NAVIGATION_TEMPLATE: &str = "navigation.html";

/// Read-only tables and paths shared by every connection.
#[derive(Debug, Clone)]
pub struct Site {
    pub content_root: PathBuf,
    pub icon_root: PathBuf,
    pub error_pages: ErrorPages,
    pub navigation_template: PathBuf,
    pub content_types: ContentTypes,
    pub read_timeout: Duration,
}

impl Site {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            content_root: cfg.content_root.clone(),
            icon_root: cfg.icon_root.clone(),
            error_pages: ErrorPages::in_dir(&cfg.templates_dir),
            navigation_template: cfg.templates_dir.join(NAVIGATION_TEMPLATE),
            content_types: ContentTypes::default(),
            read_timeout: cfg.read_timeout(),
        }
    }
}
