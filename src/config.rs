use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Server configuration.
///
/// Built from defaults, an optional YAML file named by `FILESERVE_CONFIG`,
/// and the `HOST`, `PORT` and `CONTENT_ROOT` environment variables, in that
/// order of precedence (later wins).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory all non-icon requests are resolved against.
    pub content_root: PathBuf,
    /// Directory holding the error pages and the navigation template.
    pub templates_dir: PathBuf,
    /// Directory the `/img` shortcut is served from.
    pub icon_root: PathBuf,
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8000,
            content_root: PathBuf::from("./web"),
            templates_dir: PathBuf::from("./templates"),
            icon_root: PathBuf::from("."),
            read_timeout_secs: 60,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("FILESERVE_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path))?;
                Self::from_yaml(&raw)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(host) = std::env::var("HOST") {
            cfg.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            cfg.port = port
                .parse()
                .with_context(|| format!("invalid PORT value {:?}", port))?;
        }
        if let Ok(root) = std::env::var("CONTENT_ROOT") {
            cfg.content_root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(raw).context("parsing YAML configuration")
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}
