use crate::http::parser::ParseError;
use crate::http::response::StatusCode;

/// Ways a client request can be refused.
///
/// Every variant is answered with an error page; none of them ever escape
/// the connection that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    MalformedRequestLine,
    UnsupportedMethod,
    MissingLeadingSlash,
    UnsupportedVersion,
    ResourceNotFound,
    /// The decoded path climbs above its root through `..` segments.
    PathEscapesRoot,
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::MalformedRequestLine => StatusCode::BadRequest,
            RequestError::UnsupportedMethod => StatusCode::NotImplemented,
            RequestError::MissingLeadingSlash => StatusCode::BadRequest,
            RequestError::UnsupportedVersion => StatusCode::VersionNotSupported,
            RequestError::ResourceNotFound => StatusCode::NotFound,
            RequestError::PathEscapesRoot => StatusCode::BadRequest,
        }
    }
}

impl From<ParseError> for RequestError {
    fn from(_: ParseError) -> Self {
        RequestError::MalformedRequestLine
    }
}
