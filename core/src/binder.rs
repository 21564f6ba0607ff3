//! # Network Binder
//!
//! Implements the "bind to WiFi" use case: pick the first network that
//! carries WiFi transport and route the process's traffic through it.
//!
//! The binder holds no state of its own. Every call enumerates afresh through
//! the [`Connectivity`] port, and the only lasting effect of a successful call
//! is the process-wide binding owned by the host.

use tracing::{debug, info, warn};

use wifibind_common::connectivity::Connectivity;
use wifibind_common::error::BindError;
use wifibind_common::network::{NetworkCapabilities, NetworkHandle, Transport};

/// One enumerated network together with what the host reported about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkReport {
    pub network: NetworkHandle,
    /// `None` when the network disappeared before it could be queried.
    pub capabilities: Option<NetworkCapabilities>,
}

pub struct NetworkBinder {
    connectivity: Box<dyn Connectivity>,
}

impl NetworkBinder {
    pub fn new(connectivity: Box<dyn Connectivity>) -> Self {
        Self { connectivity }
    }

    /// Finds the first enumerated network carrying WiFi transport, without binding.
    pub fn select_wifi_network(&self) -> Result<NetworkHandle, BindError> {
        if !self.connectivity.supports_network_binding() {
            warn!("Network binding is not available on this host");
            return Err(BindError::UnsupportedPlatform);
        }

        let networks = self.connectivity.all_networks();
        debug!("Inspecting {} network(s) for WiFi transport", networks.len());

        networks
            .into_iter()
            .find(|network| {
                self.connectivity
                    .network_capabilities(network)
                    .is_some_and(|caps| caps.has_transport(Transport::Wifi))
            })
            .ok_or(BindError::NoWifiNetwork)
    }

    /// Routes all subsequent process traffic through the first WiFi network.
    ///
    /// Nothing is bound when this fails. A success re-applies the binding even
    /// if the same network was already bound.
    pub fn bind_to_wifi_network(&self) -> Result<(), BindError> {
        let network = self.select_wifi_network()?;
        self.connectivity.bind_process_to_network(Some(&network));
        info!("Process traffic now egresses through {network}");
        Ok(())
    }

    /// Drops the process binding so traffic follows the OS default again.
    pub fn release_binding(&self) {
        self.connectivity.bind_process_to_network(None);
    }

    pub fn bound_network(&self) -> Option<NetworkHandle> {
        self.connectivity.bound_network()
    }

    /// Every known network with its capabilities, in enumeration order.
    pub fn survey(&self) -> Vec<NetworkReport> {
        self.connectivity
            .all_networks()
            .into_iter()
            .map(|network| {
                let capabilities = self.connectivity.network_capabilities(&network);
                NetworkReport { network, capabilities }
            })
            .collect()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
