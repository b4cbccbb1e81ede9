//! Filesystem side of the server.
//!
//! Resolves request paths against the content root and implements the
//! response strategies: error pages, static files (text and binary) and
//! navigation pages for directories without an index.

pub mod error_page;
pub mod navigation;
pub mod resolver;
pub mod site;
pub mod static_file;

pub use resolver::{ResolvedTarget, resolve};
pub use site::Site;
