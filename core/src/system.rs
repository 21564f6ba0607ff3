use std::path::PathBuf;

use pnet::datalink::{self, NetworkInterface};
use tracing::debug;

use wifibind_common::config::Config;
use wifibind_common::connectivity::Connectivity;
use wifibind_common::network::interface::{handle_for, is_known_network, transport_capabilities};
use wifibind_common::network::{NetworkCapabilities, NetworkHandle};

use crate::process;

/// [`Connectivity`] backed by the host's interfaces and the process binding slot.
pub struct SystemConnectivity {
    sysfs_root: PathBuf,
}

impl SystemConnectivity {
    pub fn new(cfg: &Config) -> Self {
        Self {
            sysfs_root: cfg.sysfs_root.clone(),
        }
    }

    fn find_interface(&self, network: &NetworkHandle) -> Option<NetworkInterface> {
        datalink::interfaces()
            .into_iter()
            .find(|i| i.index == network.index() && i.name == network.name())
    }
}

impl Connectivity for SystemConnectivity {
    fn supports_network_binding(&self) -> bool {
        cfg!(any(target_os = "linux", target_os = "android"))
    }

    fn all_networks(&self) -> Vec<NetworkHandle> {
        let networks: Vec<NetworkHandle> = datalink::interfaces()
            .iter()
            .filter(|interface| is_known_network(interface))
            .map(handle_for)
            .collect();
        debug!("Identified {} network(s)", networks.len());
        networks
    }

    fn network_capabilities(&self, network: &NetworkHandle) -> Option<NetworkCapabilities> {
        let interface = self.find_interface(network)?;
        Some(transport_capabilities(&interface, &self.sysfs_root))
    }

    fn bind_process_to_network(&self, network: Option<&NetworkHandle>) {
        process::bind(network);
    }

    fn bound_network(&self) -> Option<NetworkHandle> {
        process::bound_network()
    }
}
