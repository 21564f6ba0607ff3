use std::fmt;

/// Opaque identifier for one network path known to the OS.
///
/// Handles are produced by a [`Connectivity`](crate::connectivity::Connectivity)
/// backend on every enumeration and are not meant to outlive the call that
/// produced them, except as the record of the current process binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkHandle {
    index: u32,
    name: String,
}

impl NetworkHandle {
    pub fn new(index: u32, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Name of the interface backing this network, e.g. `wlan0`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NetworkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.index)
    }
}
