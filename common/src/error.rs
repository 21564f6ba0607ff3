use thiserror::Error;

/// Why the process could not be bound to a WiFi network.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum BindError {
    /// Enumeration finished without finding a network that carries WiFi transport.
    #[error("no WiFi network is available")]
    NoWifiNetwork,
    /// The host cannot query capabilities or rebind process traffic.
    #[error("network binding is not supported on this platform")]
    UnsupportedPlatform,
}

/// Failures at the command boundary, before the binder is reached.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}
