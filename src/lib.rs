//! fileserve - minimal HTTP/1.x file server
//!
//! Serves a content root over HTTP: static files, index pages, generated
//! directory listings and canned error pages.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
