/// HTTP request methods.
///
/// Only GET and HEAD are served; everything else is kept as `Other` so the
/// connection can answer with 501 Not Implemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// Any other token found in the method position
    Other(String),
}

/// The parsed request line of a client request.
///
/// Headers and body are never consulted, so only the three request-line
/// tokens are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, HEAD, ...)
    pub method: Method,
    /// The percent-decoded request target (e.g. "/docs/index.html")
    pub path: String,
    /// HTTP version, uppercased (typically "HTTP/1.1")
    pub version: String,
}

impl Method {
    /// Parses an HTTP method from an already uppercased token.
    ///
    /// # Example
    ///
    /// ```
    /// # use fileserve::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("POST"), Method::Other("POST".to_string()));
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::Other(s) => s,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Method::GET | Method::HEAD)
    }

    /// Whether a response to this method carries a body.
    ///
    /// Only HEAD suppresses the body; unsupported methods still get the
    /// error page body.
    pub fn wants_body(&self) -> bool {
        !matches!(self, Method::HEAD)
    }
}

impl Request {
    pub fn is_supported_version(&self) -> bool {
        matches!(self.version.as_str(), "HTTP/1.0" | "HTTP/1.1")
    }

    /// Requests under `/img` are navigation-page icons served from the
    /// icon root rather than the content root.
    pub fn is_icon(&self) -> bool {
        self.path.starts_with("/img")
    }
}
