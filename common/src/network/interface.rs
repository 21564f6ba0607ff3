use std::fs;
use std::path::Path;

use pnet::datalink::NetworkInterface;
use tracing::trace;

use crate::network::{NetworkCapabilities, NetworkHandle, Transport};

#[cfg(any(target_os = "linux", target_os = "android"))]
use sysfs::classify;
#[cfg(target_os = "macos")]
use macos_impl::classify;

const CELLULAR_PREFIXES: &[&str] = &["wwan", "rmnet", "ccmni"];
const VPN_PREFIXES: &[&str] = &["tun", "wg", "ppp", "utun", "ipsec"];
const BLUETOOTH_PREFIXES: &[&str] = &["bnep"];

/// Handle identifying `interface` for the lifetime of one enumeration.
pub fn handle_for(interface: &NetworkInterface) -> NetworkHandle {
    NetworkHandle::new(interface.index, interface.name.clone())
}

/// Interfaces worth offering as networks: anything that is administratively up.
pub fn is_known_network(interface: &NetworkInterface) -> bool {
    interface.is_up()
}

/// Determines which transports `interface` carries.
///
/// `sysfs_root` is only read on Linux and Android.
pub fn transport_capabilities(interface: &NetworkInterface, sysfs_root: &Path) -> NetworkCapabilities {
    if interface.is_loopback() {
        return NetworkCapabilities::new().with_transport(Transport::Loopback);
    }

    #[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]
    let caps = classify(interface, sysfs_root);
    #[cfg(not(any(target_os = "linux", target_os = "android", target_os = "macos")))]
    let caps = {
        let _ = sysfs_root;
        classify_by_name(interface)
    };

    trace!("Interface {} carries transports: {}", interface.name, caps);
    caps
}

/// Fallback classification from flags and naming conventions alone.
pub fn classify_by_name(interface: &NetworkInterface) -> NetworkCapabilities {
    let mut caps = NetworkCapabilities::new();
    if has_prefix(&interface.name, CELLULAR_PREFIXES) {
        caps.add_transport(Transport::Cellular);
    }
    if interface.is_point_to_point() || has_prefix(&interface.name, VPN_PREFIXES) {
        caps.add_transport(Transport::Vpn);
    }
    if has_prefix(&interface.name, BLUETOOTH_PREFIXES) {
        caps.add_transport(Transport::Bluetooth);
    }
    caps
}

fn has_prefix(name: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| name.starts_with(prefix))
}

#[cfg_attr(not(any(target_os = "linux", target_os = "android")), allow(dead_code))]
mod sysfs {
    use super::*;

    pub fn classify(interface: &NetworkInterface, sysfs_root: &Path) -> NetworkCapabilities {
        let dir = sysfs_root.join(&interface.name);
        let devtype = read_devtype(&dir);
        let devtype = devtype.as_deref();

        let mut caps = classify_by_name(interface);

        if dir.join("wireless").exists() || dir.join("phy80211").exists() || devtype == Some("wlan") {
            caps.add_transport(Transport::Wifi);
        }
        if devtype == Some("wwan") {
            caps.add_transport(Transport::Cellular);
        }
        if dir.join("tun_flags").exists() || devtype == Some("wireguard") {
            caps.add_transport(Transport::Vpn);
        }
        if devtype == Some("bluetooth") {
            caps.add_transport(Transport::Bluetooth);
        }
        if caps.is_empty() && dir.join("device").exists() {
            caps.add_transport(Transport::Ethernet);
        }

        caps
    }

    /// Reads the `DEVTYPE` key out of an interface's `uevent` file.
    fn read_devtype(dir: &Path) -> Option<String> {
        let uevent = fs::read_to_string(dir.join("uevent")).ok()?;
        uevent
            .lines()
            .find_map(|line| line.strip_prefix("DEVTYPE="))
            .map(|value| value.trim().to_string())
    }
}

#[cfg(target_os = "macos")]
mod macos_impl {
    use super::*;
    use std::collections::HashSet;
    use std::process::Command;
    use std::sync::OnceLock;

    struct HardwarePorts {
        physical_devices: HashSet<String>,
        wireless_devices: HashSet<String>,
    }

    /// Runs `networksetup` once and caches the result for the process lifetime.
    fn hardware_ports() -> &'static HardwarePorts {
        static HARDWARE_PORTS: OnceLock<HardwarePorts> = OnceLock::new();

        HARDWARE_PORTS.get_or_init(|| {
            let mut physical = HashSet::new();
            let mut wireless = HashSet::new();

            if let Ok(output) = Command::new("networksetup").arg("-listallhardwareports").output() {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let mut port_is_wifi = false;
                for line in stdout.lines() {
                    if let Some(port) = line.strip_prefix("Hardware Port: ") {
                        port_is_wifi = matches!(port.trim(), "Wi-Fi" | "AirPort");
                    } else if let Some(device) = line.strip_prefix("Device: ") {
                        let device = device.trim().to_string();
                        if port_is_wifi {
                            wireless.insert(device.clone());
                        }
                        physical.insert(device);
                    }
                }
            }

            HardwarePorts {
                physical_devices: physical,
                wireless_devices: wireless,
            }
        })
    }

    pub fn classify(interface: &NetworkInterface, _sysfs_root: &Path) -> NetworkCapabilities {
        let ports = hardware_ports();
        let mut caps = classify_by_name(interface);

        if ports.wireless_devices.contains(&interface.name) {
            caps.add_transport(Transport::Wifi);
        } else if caps.is_empty() && ports.physical_devices.contains(&interface.name) {
            caps.add_transport(Transport::Ethernet);
        }

        caps
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
