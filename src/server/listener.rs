use std::net::{Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

use crate::http::connection::Connection;

/// Requested accept backlog; the kernel clamps it to its own maximum.
const LISTEN_BACKLOG: i32 = i32::MAX;

/// What every connection task needs; shared read-only.
#[derive(Debug, Clone)]
pub struct ServeContext {
    pub root: Arc<PathBuf>,
    pub buffer_capacity: usize,
}

/// Binds a dual-stack (IPv4 + IPv6) TCP listener on all interfaces.
pub fn create_listener(port: u16) -> anyhow::Result<TcpListener> {
    let addr = SocketAddr::from((Ipv6Addr::UNSPECIFIED, port));

    let socket = Socket::new(Domain::IPV6, Type::STREAM, Some(Protocol::TCP))
        .context("could not create socket")?;

    // On Windows SO_REUSEADDR lets other processes bind the same port.
    #[cfg(not(windows))]
    socket
        .set_reuse_address(true)
        .context("could not set SO_REUSEADDR")?;

    socket
        .set_only_v6(false)
        .context("could not enable dual-stack mode")?;
    socket
        .bind(&addr.into())
        .with_context(|| format!("could not bind port {port}"))?;
    socket.listen(LISTEN_BACKLOG).context("could not listen")?;
    socket
        .set_nonblocking(true)
        .context("could not set non-blocking mode")?;

    let listener = TcpListener::from_std(socket.into()).context("could not register listener")?;
    Ok(listener)
}

/// Turns off Nagle's algorithm so small writes go out immediately.
///
/// Applied per accepted stream; not every platform copies `TCP_NODELAY`
/// from the listening socket.
pub fn disable_nagle(stream: &TcpStream) -> std::io::Result<()> {
    stream.set_nodelay(true)
}

/// Accepts connections forever, one task per connection.
///
/// A failed accept is logged and the loop keeps going.
pub async fn run(listener: TcpListener, ctx: ServeContext) -> anyhow::Result<()> {
    info!("Listening on {}", listener.local_addr()?);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "Could not accept incoming connection");
                continue;
            }
        };
        debug!(%peer, "Accepted a new connection");

        if let Err(e) = disable_nagle(&socket) {
            warn!(%peer, error = %e, "Could not set TCP_NODELAY");
        }

        let ctx = ctx.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket).with_peer(peer);
            let disposition = conn.run(&ctx.root, ctx.buffer_capacity).await;
            debug!(%peer, ?disposition, "Connection closed");
        });
    }
}
