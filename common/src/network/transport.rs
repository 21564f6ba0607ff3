use std::fmt;

/// Underlying medium of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transport {
    Wifi,
    Cellular,
    Ethernet,
    Vpn,
    Bluetooth,
    Loopback,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Transport::Wifi => "wifi",
            Transport::Cellular => "cellular",
            Transport::Ethernet => "ethernet",
            Transport::Vpn => "vpn",
            Transport::Bluetooth => "bluetooth",
            Transport::Loopback => "loopback",
        };
        f.write_str(label)
    }
}

/// The set of transports a network exposes.
///
/// A network may carry several transports at once (a VPN running over WiFi
/// reports both on some hosts) or none at all (software bridges).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkCapabilities {
    transports: Vec<Transport>,
}

impl NetworkCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.add_transport(transport);
        self
    }

    pub fn add_transport(&mut self, transport: Transport) {
        if !self.transports.contains(&transport) {
            self.transports.push(transport);
            self.transports.sort();
        }
    }

    pub fn has_transport(&self, transport: Transport) -> bool {
        self.transports.contains(&transport)
    }

    pub fn transports(&self) -> &[Transport] {
        &self.transports
    }

    pub fn is_empty(&self) -> bool {
        self.transports.is_empty()
    }
}

impl FromIterator<Transport> for NetworkCapabilities {
    fn from_iter<I: IntoIterator<Item = Transport>>(iter: I) -> Self {
        let mut caps = NetworkCapabilities::new();
        for transport in iter {
            caps.add_transport(transport);
        }
        caps
    }
}

impl fmt::Display for NetworkCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.transports.is_empty() {
            return f.write_str("none");
        }
        let labels: Vec<String> = self.transports.iter().map(|t| t.to_string()).collect();
        f.write_str(&labels.join(", "))
    }
}
