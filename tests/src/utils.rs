use std::sync::{Arc, Mutex};

use wifibind_common::connectivity::Connectivity;
use wifibind_common::network::{NetworkCapabilities, NetworkHandle, Transport};
use wifibind_core::binder::NetworkBinder;
use wifibind_core::channel::NetworkBinderChannel;

/// Every interaction the binder had with the host, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    SupportCheck,
    Enumerate,
    Capabilities(String),
    Bind(Option<String>),
}

/// Scripted stand-in for the OS network stack.
#[derive(Clone, Default)]
pub struct ScriptedHost {
    unsupported: bool,
    networks: Vec<(NetworkHandle, NetworkCapabilities)>,
    calls: Arc<Mutex<Vec<HostCall>>>,
    bound: Arc<Mutex<Option<NetworkHandle>>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unsupported(mut self) -> Self {
        self.unsupported = true;
        self
    }

    pub fn network(mut self, name: &str, transports: &[Transport]) -> Self {
        let index = self.networks.len() as u32 + 2;
        let caps: NetworkCapabilities = transports.iter().copied().collect();
        self.networks.push((NetworkHandle::new(index, name), caps));
        self
    }

    pub fn handle(&self, name: &str) -> NetworkHandle {
        self.networks
            .iter()
            .map(|(handle, _)| handle)
            .find(|handle| handle.name() == name)
            .cloned()
            .unwrap_or_else(|| panic!("no scripted network named {name}"))
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn bind_calls(&self) -> Vec<Option<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::Bind(target) => Some(target),
                _ => None,
            })
            .collect()
    }

    pub fn channel(&self) -> NetworkBinderChannel {
        NetworkBinderChannel::new(NetworkBinder::new(Box::new(self.clone())))
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Connectivity for ScriptedHost {
    fn supports_network_binding(&self) -> bool {
        self.record(HostCall::SupportCheck);
        !self.unsupported
    }

    fn all_networks(&self) -> Vec<NetworkHandle> {
        self.record(HostCall::Enumerate);
        self.networks.iter().map(|(handle, _)| handle.clone()).collect()
    }

    fn network_capabilities(&self, network: &NetworkHandle) -> Option<NetworkCapabilities> {
        self.record(HostCall::Capabilities(network.name().to_string()));
        self.networks
            .iter()
            .find(|(handle, _)| handle == network)
            .map(|(_, caps)| caps.clone())
    }

    fn bind_process_to_network(&self, network: Option<&NetworkHandle>) {
        self.record(HostCall::Bind(network.map(|n| n.name().to_string())));
        *self.bound.lock().unwrap() = network.cloned();
    }

    fn bound_network(&self) -> Option<NetworkHandle> {
        self.bound.lock().unwrap().clone()
    }
}
