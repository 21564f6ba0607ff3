pub mod bind;
pub mod call;
pub mod networks;
pub mod probe;
pub mod serve;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use wifibind_common::config::{Config, DEFAULT_SYSFS_ROOT};
use wifibind_core::binder::NetworkBinder;
use wifibind_core::channel::NetworkBinderChannel;
use wifibind_core::system::SystemConnectivity;

#[derive(Parser)]
#[command(name = "wifibind")]
#[command(about = "Route this process's traffic through the WiFi network.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat to silence warnings too
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Where per-interface attributes are read from (Linux)
    #[arg(long, global = true, default_value = DEFAULT_SYSFS_ROOT)]
    pub sysfs_root: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bind to the first WiFi network found
    #[command(alias = "b")]
    Bind {
        /// Only report which network would be chosen
        #[arg(long)]
        dry_run: bool,
    },
    /// Send a raw command name through the channel
    #[command(alias = "c")]
    Call { method: String },
    /// List known networks and their transports
    #[command(alias = "n")]
    Networks,
    /// Answer one command per stdin line until EOF
    #[command(alias = "s")]
    Serve,
    /// Bind to WiFi, then open a TCP connection through it
    #[command(alias = "p")]
    Probe {
        addr: SocketAddr,
        #[arg(long, default_value_t = 3_000)]
        timeout_ms: u64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            sysfs_root: self.sysfs_root.clone(),
            quiet: self.quiet,
        }
    }
}

pub fn system_binder(cfg: &Config) -> NetworkBinder {
    NetworkBinder::new(Box::new(SystemConnectivity::new(cfg)))
}

pub fn system_channel(cfg: &Config) -> NetworkBinderChannel {
    NetworkBinderChannel::new(system_binder(cfg))
}
