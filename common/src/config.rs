use std::path::PathBuf;

/// Default location of the kernel's per-interface attributes.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/net";

pub struct Config {
    /// Directory holding one entry per network interface.
    ///
    /// Only consulted on Linux and Android, where transports are read from sysfs.
    pub sysfs_root: PathBuf,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sysfs_root: PathBuf::from(DEFAULT_SYSFS_ROOT),
            quiet: 0,
        }
    }
}
