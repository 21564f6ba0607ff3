use std::net::SocketAddr;
use std::time::Duration;

use tracing::warn;
use wifibind_common::config::Config;
use wifibind_core::channel::BIND_TO_WIFI;
use wifibind_core::process;

use crate::commands::system_channel;
use crate::terminal::print;

/// Binds to WiFi and proves it by connecting to `addr` through the bound network.
pub async fn probe(addr: SocketAddr, connect_timeout: Duration, cfg: &Config) -> anyhow::Result<()> {
    if !is_root::is_root() {
        warn!("Not running as root; the kernel may refuse to pin sockets to a device");
    }

    let reply = system_channel(cfg).handle(BIND_TO_WIFI);
    if !reply.is_success() {
        anyhow::bail!("{reply}");
    }

    let stream = process::connect_tcp(addr, connect_timeout).await?;

    print::header("probe", cfg.quiet);
    if let Some(network) = process::bound_network() {
        print::aligned_line("Network", &network);
    }
    print::aligned_line("Local", stream.local_addr()?);
    print::aligned_line("Remote", addr);
    Ok(())
}
