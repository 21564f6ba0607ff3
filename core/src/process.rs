//! Process-wide network binding.
//!
//! Holds the network that outgoing traffic of this process should use, and
//! the socket helpers that honour it. The slot is global: a binding made by
//! any caller applies to every socket opened through this module afterwards,
//! until it is replaced or released. Concurrent writers race and the last one
//! wins.

use std::net::SocketAddr;
use std::sync::RwLock;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpSocket, TcpStream};
use tokio::time::timeout;
use tracing::{debug, info};

use wifibind_common::network::NetworkHandle;

static PROCESS_BINDING: RwLock<Option<NetworkHandle>> = RwLock::new(None);

/// Replaces the process binding. `None` restores the OS default route.
pub fn bind(network: Option<&NetworkHandle>) {
    let mut slot = PROCESS_BINDING.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    match network {
        Some(network) => info!("Binding process traffic to {network}"),
        None if slot.is_some() => info!("Releasing process network binding"),
        None => {}
    }
    *slot = network.cloned();
}

pub fn bound_network() -> Option<NetworkHandle> {
    PROCESS_BINDING
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Opens a TCP connection to `addr` through the bound network, if any.
pub async fn connect_tcp(addr: SocketAddr, connect_timeout: Duration) -> anyhow::Result<TcpStream> {
    let socket: TcpSocket = if addr.is_ipv4() {
        TcpSocket::new_v4()
    } else {
        TcpSocket::new_v6()
    }
    .context("opening tcp socket")?;

    if let Some(network) = bound_network() {
        apply_binding(&socket, &network)?;
    }

    let stream: TcpStream = timeout(connect_timeout, socket.connect(addr))
        .await
        .with_context(|| format!("connecting to {addr} timed out after {connect_timeout:?}"))?
        .with_context(|| format!("connecting to {addr}"))?;

    debug!("Connected to {addr} from {:?}", stream.local_addr().ok());
    Ok(stream)
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn apply_binding(socket: &TcpSocket, network: &NetworkHandle) -> anyhow::Result<()> {
    socket
        .bind_device(Some(network.name().as_bytes()))
        .with_context(|| format!("binding socket to {network}"))
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn apply_binding(_socket: &TcpSocket, network: &NetworkHandle) -> anyhow::Result<()> {
    anyhow::bail!("cannot bind sockets to {network} on this platform")
}
