use std::fmt;
use std::time::SystemTime;

/// Identifies this server in the `Server` header.
pub const SERVER_NAME: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): Request successful
/// - `BadRequest` (400): Malformed request
/// - `NotFound` (404): Resource not found
/// - `NotImplemented` (501): Method other than GET/HEAD
/// - `VersionNotSupported` (505): Version other than HTTP/1.0 or HTTP/1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
    /// 505 HTTP Version Not Supported
    VersionNotSupported,
}

/// A numeric code outside the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatusCode(pub u16);

impl fmt::Display for UnknownStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported status code {}", self.0)
    }
}

impl std::error::Error for UnknownStatusCode {}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use fileserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::VersionNotSupported.as_u16(), 505);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
            StatusCode::VersionNotSupported => 505,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
            StatusCode::VersionNotSupported => "HTTP Version Not Supported",
        }
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = UnknownStatusCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(StatusCode::Ok),
            400 => Ok(StatusCode::BadRequest),
            404 => Ok(StatusCode::NotFound),
            501 => Ok(StatusCode::NotImplemented),
            505 => Ok(StatusCode::VersionNotSupported),
            other => Err(UnknownStatusCode(other)),
        }
    }
}

/// Status line and headers of a response.
///
/// Every response carries the same fixed set of headers: `Date`, `Server`,
/// `Content-type` and `Content-length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    pub status: StatusCode,
    pub date: SystemTime,
    pub content_type: String,
    pub content_length: u64,
}

impl ResponseHeader {
    pub fn new(status: StatusCode, content_type: impl Into<String>, content_length: u64) -> Self {
        Self {
            status,
            date: SystemTime::now(),
            content_type: content_type.into(),
            content_length,
        }
    }

    /// Builds a header from a numeric status code.
    pub fn for_code(
        code: u16,
        content_type: impl Into<String>,
        content_length: u64,
    ) -> Result<Self, UnknownStatusCode> {
        Ok(Self::new(StatusCode::try_from(code)?, content_type, content_length))
    }

    /// Renders the CRLF-terminated header block, blank line included.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {} {}\r\n\
             Date: {}\r\n\
             Server: {}\r\n\
             Content-type: {}\r\n\
             Content-length: {}\r\n\
             \r\n",
            self.status.as_u16(),
            self.status.reason_phrase(),
            httpdate::fmt_http_date(self.date),
            SERVER_NAME,
            self.content_type,
            self.content_length,
        )
        .into_bytes()
    }
}
