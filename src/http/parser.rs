use std::fmt;

use crate::http::request::{Method, Path, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The method token is not one of the recognized methods
    UnsupportedMethod(String),
    /// The request line ends right after the method token
    MissingTarget,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnsupportedMethod(token) => write!(f, "unsupported method {token:?}"),
            ParseError::MissingTarget => f.write_str("request line has no target"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses the request line at the start of `text`.
///
/// The method ends at the first space and the target at the next one. The
/// HTTP version, headers and body are not looked at.
pub fn parse_request(text: &str) -> Result<Request, ParseError> {
    let (token, rest) = match text.split_once(' ') {
        Some((token, rest)) => (token, Some(rest)),
        None => (text, None),
    };

    let method = Method::from_token(token);
    if method == Method::Unsupported {
        return Err(ParseError::UnsupportedMethod(token.to_string()));
    }

    let rest = rest.ok_or(ParseError::MissingTarget)?;
    let target = rest.split(' ').next().unwrap_or_default();

    Ok(Request {
        method,
        path: Path::parse(target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = parse_request("GET / HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path.components, vec![""]);
        assert_eq!(req.path.query, "");
    }

    #[test]
    fn target_without_version() {
        let req = parse_request("GET /a/b").unwrap();
        assert_eq!(req.path.components, vec!["a", "b"]);
    }
}
