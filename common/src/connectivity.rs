//! The **port** through which the binder talks to the host's network stack.
//!
//! Keeping the OS calls behind this trait leaves network selection free of
//! global state, so it can be driven by a fake backend in tests while the real
//! adapter is only wired in by the outermost layer.

use crate::network::{NetworkCapabilities, NetworkHandle};

pub trait Connectivity {
    /// Whether this host can report capabilities and rebind process traffic.
    fn supports_network_binding(&self) -> bool;

    /// Every network the OS currently knows about, in OS-defined order.
    fn all_networks(&self) -> Vec<NetworkHandle>;

    /// Capabilities of `network`, or `None` when the network is gone.
    fn network_capabilities(&self, network: &NetworkHandle) -> Option<NetworkCapabilities>;

    /// Routes all subsequent process traffic through `network`.
    ///
    /// `None` drops the binding so traffic follows the OS default again.
    /// Fire-and-forget: the host gives no feedback on whether routing changed.
    fn bind_process_to_network(&self, network: Option<&NetworkHandle>);

    fn bound_network(&self) -> Option<NetworkHandle>;
}
