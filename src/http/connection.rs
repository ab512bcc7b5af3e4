use std::io;
use std::net::SocketAddr;
use std::path::Path;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, trace};

use crate::handlers;
use crate::http::buffer::Buffer;
use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::response::is_recovered;

/// One client conversation: a single request, a single response.
pub struct Connection<S> {
    stream: S,
    peer: Option<SocketAddr>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Accepted,
    Received(Buffer),
    Parsed(Request),
    Responded(u16), // status reported by the handler
    Closing,
    Closed,
}

/// How a connection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Reading the request failed; nothing was sent
    ReceiveFailed,
    /// The request line was rejected; nothing was sent
    Unparsed,
    /// A response was sent and the outcome counts as recovered
    Succeeded,
    /// A response was attempted but the outcome is a server-side failure
    Failed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            peer: None,
            state: ConnectionState::Accepted,
        }
    }

    pub fn with_peer(mut self, peer: SocketAddr) -> Self {
        self.peer = Some(peer);
        self
    }

    pub fn peer(&self) -> Option<SocketAddr> {
        self.peer
    }

    /// Drives the connection from accept to close.
    ///
    /// The stream is shut down on every path, including receive and parse
    /// failures, which send no response at all.
    pub async fn run(&mut self, root: &Path, buffer_capacity: usize) -> Disposition {
        let mut disposition = Disposition::ReceiveFailed;

        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Accepted => {
                    let mut buffer = Buffer::new(buffer_capacity);
                    match self.receive(&mut buffer).await {
                        Ok(()) => self.state = ConnectionState::Received(buffer),
                        Err(e) => {
                            error!(peer = ?self.peer, error = %e, "Could not read any data from connection");
                            self.state = ConnectionState::Closing;
                        }
                    }
                }

                ConnectionState::Received(buffer) => match parse_request(&buffer.into_text()) {
                    Ok(request) => self.state = ConnectionState::Parsed(request),
                    Err(e) => {
                        error!(peer = ?self.peer, error = %e, "Could not parse HTTP request");
                        disposition = Disposition::Unparsed;
                        self.state = ConnectionState::Closing;
                    }
                },

                ConnectionState::Parsed(request) => {
                    let status = handlers::dispatch(&request, self, root).await;
                    self.state = ConnectionState::Responded(status);
                }

                ConnectionState::Responded(status) => {
                    if is_recovered(status) {
                        disposition = Disposition::Succeeded;
                    } else {
                        error!(peer = ?self.peer, status, "Could not handle HTTP request");
                        disposition = Disposition::Failed;
                    }
                    self.state = ConnectionState::Closing;
                }

                ConnectionState::Closing => {
                    self.close().await;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        disposition
    }

    /// Performs exactly one read of up to `buffer.capacity()` bytes.
    ///
    /// Reading 0 bytes (peer already closed) is not an error. On error the
    /// buffer is left empty.
    pub async fn receive(&mut self, buffer: &mut Buffer) -> io::Result<()> {
        match self.stream.read(buffer.fill_region()).await {
            Ok(n) => {
                trace!(peer = ?self.peer, bytes = n, "Received data");
                buffer.set_len(n);
                Ok(())
            }
            Err(e) => {
                buffer.clear();
                Err(e)
            }
        }
    }

    /// Writes some prefix of `bytes`, returning how much was written.
    pub async fn send(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.stream.write(bytes).await
    }

    /// Writes all of `bytes`, looping over short writes.
    pub async fn send_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut written = 0;

        while written < bytes.len() {
            let n = self.send(&bytes[written..]).await?;

            if n == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "connection closed while writing",
                ));
            }

            written += n;
        }

        Ok(())
    }

    /// Flushes and shuts the stream down. Errors are ignored.
    pub async fn close(&mut self) {
        let _ = self.stream.flush().await;
        let _ = self.stream.shutdown().await;
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}
