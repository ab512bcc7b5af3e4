use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{error, warn};

use crate::http::connection::Connection;
use crate::http::response::{ResponseHead, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a status line and headers, terminated by the blank line.
pub fn serialize_head(head: &ResponseHead) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        head.status.as_u16(),
        head.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &head.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Sends a bare status line (no headers, no body) in one write.
///
/// Always returns the status code; a failed or short write is logged only.
pub async fn send_status<S>(conn: &mut Connection<S>, status: StatusCode) -> u16
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let buf = serialize_head(&ResponseHead::new(status));

    match conn.send(&buf).await {
        Ok(n) if n == buf.len() => {}
        Ok(_) => warn!(peer = ?conn.peer(), "Couldn't send full response"),
        Err(e) => error!(peer = ?conn.peer(), error = %e, "Error sending response data"),
    }

    status.as_u16()
}

/// `HTTP/1.1 404 Not Found`
pub async fn send_not_found<S>(conn: &mut Connection<S>) -> u16
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    send_status(conn, StatusCode::NotFound).await
}

/// `HTTP/1.1 500 Internal Server Error`
pub async fn send_internal_error<S>(conn: &mut Connection<S>) -> u16
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    send_status(conn, StatusCode::InternalServerError).await
}

/// `HTTP/1.1 501 Not Implemented`
pub async fn send_not_implemented<S>(conn: &mut Connection<S>) -> u16
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    send_status(conn, StatusCode::NotImplemented).await
}
