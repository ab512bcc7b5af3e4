//! Request handlers
//!
//! Routes a parsed request to exactly one handler and classifies the result.

pub mod static_file;

use std::path::Path;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::http::connection::Connection;
use crate::http::request::{Method, Request};
use crate::http::response::is_recovered;
use crate::http::writer::send_not_implemented;

/// Writes the response for `request` and returns the status it produced.
///
/// GET is served from `root`; every other method gets 501.
pub async fn dispatch<S>(request: &Request, conn: &mut Connection<S>, root: &Path) -> u16
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    match request.method {
        Method::GET => static_file::serve(&request.path, conn, root).await,
        Method::HEAD
        | Method::POST
        | Method::PUT
        | Method::DELETE
        | Method::PATCH
        | Method::Unsupported => send_not_implemented(conn).await,
    }
}

/// Handles `request`, returning whether it finished without server error.
///
/// A 501 is reported as a failure even though the client received it.
pub async fn handle_request<S>(request: &Request, conn: &mut Connection<S>, root: &Path) -> bool
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    is_recovered(dispatch(request, conn, root).await)
}
