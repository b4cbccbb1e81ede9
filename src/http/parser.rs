use crate::http::request::{Method, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was received.
    Empty,
    /// The first line is not `METHOD SP target SP version`.
    MalformedRequestLine,
    /// The target does not percent-decode to valid UTF-8.
    InvalidEncoding,
}

/// Parses the request line out of the bytes of a single socket read.
///
/// Everything after the first line terminator is ignored. The method and
/// version are uppercased, the target is form-url-decoded (`%XY` escapes and
/// `+` as space).
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let text = String::from_utf8_lossy(buf);
    let line = text
        .split('\n')
        .next()
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .ok_or(ParseError::MalformedRequestLine)?;

    let parts: Vec<&str> = line.split(' ').collect();
    let [method, target, version] = parts.as_slice() else {
        return Err(ParseError::MalformedRequestLine);
    };

    if method.is_empty() || target.is_empty() || version.is_empty() {
        return Err(ParseError::MalformedRequestLine);
    }

    Ok(Request {
        method: Method::from_token(&method.to_uppercase()),
        path: decode_target(target)?,
        version: version.to_uppercase(),
    })
}

fn decode_target(target: &str) -> Result<String, ParseError> {
    let spaced = target.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .map_err(|_| ParseError::InvalidEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request_line(req).unwrap();

        assert_eq!(parsed.method, Method::GET);
        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.version, "HTTP/1.1");
    }

    #[test]
    fn plus_becomes_space_but_escaped_plus_survives() {
        let parsed = parse_request_line(b"GET /a+b%2Bc HTTP/1.0\r\n").unwrap();
        assert_eq!(parsed.path, "/a b+c");
    }
}
