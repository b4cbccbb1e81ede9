use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::files::error_page::send_error;
use crate::files::navigation::send_navigation;
use crate::files::resolver::{join_within, resolve, trim_trailing_slash, ResolvedTarget};
use crate::files::static_file::{send_binary, send_text};
use crate::files::Site;
use crate::http::error::RequestError;
use crate::http::parser::parse_request_line;
use crate::http::request::{Method, Request};
use crate::http::response::StatusCode;

/// Upper bound on the bytes taken from the single request read.
pub const PACKET_SIZE: usize = 2048;

/// Handles exactly one request-response cycle on an accepted stream.
pub struct Connection<S> {
    stream: S,
    site: Arc<Site>,
    state: ConnectionState,
}

pub enum ConnectionState {
    AwaitRequest,
    Parsed(Request),
    Validated(Request),
    Dispatched(Reply),
    Closed,
}

/// The response chosen for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Error { method: Method, status: StatusCode },
    Icon { method: Method, path: PathBuf },
    Target { request: Request, target: ResolvedTarget },
}

impl Reply {
    fn error(method: Method, err: RequestError) -> Self {
        Reply::Error {
            method,
            status: err.status(),
        }
    }
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<Site>) -> Self {
        Self {
            stream,
            site,
            state: ConnectionState::AwaitRequest,
        }
    }

    /// Drives the connection to `Closed`. The stream is shut down whether or
    /// not the cycle succeeded.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.drive().await;
        self.state = ConnectionState::Closed;

        if let Err(e) = self.stream.shutdown().await {
            debug!(error = %e, "Shutdown after response failed");
        }

        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::AwaitRequest => {
                    self.state = match self.read_packet().await? {
                        Some(packet) => match parse_request_line(&packet) {
                            Ok(req) => ConnectionState::Parsed(req),
                            Err(e) => {
                                debug!(error = ?e, "Unparseable request line");
                                ConnectionState::Dispatched(Reply::error(
                                    Method::GET,
                                    RequestError::from(e),
                                ))
                            }
                        },
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Parsed(req) => {
                    info!(
                        method = req.method.as_str(),
                        path = %req.path,
                        version = %req.version,
                        "Request"
                    );
                    self.state = self.validate(req).await;
                }

                ConnectionState::Validated(req) => {
                    let resolved = resolve(&self.site.content_root, &req.path).await;
                    let reply = match resolved {
                        Ok(ResolvedTarget::NotFound) => {
                            Reply::error(req.method, RequestError::ResourceNotFound)
                        }
                        Ok(target) => Reply::Target {
                            request: req,
                            target,
                        },
                        Err(e) => Reply::error(req.method, e),
                    };
                    self.state = ConnectionState::Dispatched(reply);
                }

                ConnectionState::Dispatched(reply) => {
                    self.send(reply).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    /// A single read of at most `PACKET_SIZE` bytes. `None` when the client
    /// stayed idle past the read timeout.
    async fn read_packet(&mut self) -> anyhow::Result<Option<Vec<u8>>> {
        let mut buf = [0u8; PACKET_SIZE];

        match timeout(self.site.read_timeout, self.stream.read(&mut buf)).await {
            Ok(read) => {
                let n = read?;
                Ok(Some(buf[..n].to_vec()))
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.site.read_timeout.as_secs(),
                    "Client idle, closing connection"
                );
                Ok(None)
            }
        }
    }

    async fn validate(&self, req: Request) -> ConnectionState {
        if !req.method.is_supported() {
            return ConnectionState::Dispatched(Reply::error(
                req.method,
                RequestError::UnsupportedMethod,
            ));
        }

        if req.is_icon() {
            return ConnectionState::Dispatched(self.icon(req).await);
        }

        if !req.path.starts_with('/') {
            return ConnectionState::Dispatched(Reply::error(
                req.method,
                RequestError::MissingLeadingSlash,
            ));
        }

        if !req.is_supported_version() {
            return ConnectionState::Dispatched(Reply::error(
                req.method,
                RequestError::UnsupportedVersion,
            ));
        }

        ConnectionState::Validated(req)
    }

    async fn icon(&self, req: Request) -> Reply {
        let path = match join_within(&self.site.icon_root, &req.path) {
            Ok(path) => path,
            Err(e) => return Reply::error(req.method, e),
        };

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Reply::Icon {
                method: req.method,
                path,
            },
            _ => Reply::error(req.method, RequestError::ResourceNotFound),
        }
    }

    async fn send(&mut self, reply: Reply) -> anyhow::Result<()> {
        let site = Arc::clone(&self.site);
        let out = &mut self.stream;

        match reply {
            Reply::Error { method, status } => {
                info!(status = status.as_u16(), "Response");
                send_error(out, &site, &method, status).await
            }
            Reply::Icon { method, path } => {
                info!(status = StatusCode::Ok.as_u16(), "Response");
                send_binary(out, &site, &method, &path).await
            }
            Reply::Target { request, target } => {
                info!(status = StatusCode::Ok.as_u16(), "Response");
                match target {
                    ResolvedTarget::Directory { path } => {
                        let uri = trim_trailing_slash(&request.path);
                        send_navigation(out, &site, &request.method, &path, uri).await
                    }
                    ResolvedTarget::File { path, is_binary: true } => {
                        send_binary(out, &site, &request.method, &path).await
                    }
                    ResolvedTarget::File { path, is_binary: false } => {
                        send_text(out, &site, &request.method, &path).await
                    }
                    ResolvedTarget::NotFound => {
                        send_error(out, &site, &request.method, StatusCode::NotFound).await
                    }
                }
            }
        }
    }
}
