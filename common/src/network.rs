pub mod handle;
pub mod interface;
pub mod transport;

pub use handle::NetworkHandle;
pub use transport::{NetworkCapabilities, Transport};
