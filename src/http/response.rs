/// HTTP status codes the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

/// Status reported by a handler whose transfer did not complete.
///
/// Never written to the wire; it only feeds [`is_recovered`].
pub const TRANSFER_INCOMPLETE: u16 = 0;

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Whether a handler status counts as handled without server error.
///
/// Success and client errors (`[200, 500)`) are recovered outcomes. Server
/// errors are not, even when their response reached the client, and neither
/// is [`TRANSFER_INCOMPLETE`].
///
/// ```
/// # use docserve::http::response::is_recovered;
/// assert!(is_recovered(404));
/// assert!(!is_recovered(501));
/// ```
pub fn is_recovered(status: u16) -> bool {
    (200..500).contains(&status)
}

/// Status line and headers of a response, in send order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
}

impl ResponseHead {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    /// Appends a header; order is preserved on the wire.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Head for a file body of `content_length` bytes.
    pub fn file(content_length: u64, content_type: &str) -> Self {
        Self::new(StatusCode::Ok)
            .header("Content-Length", content_length.to_string())
            .header("Content-Type", content_type)
    }
}
