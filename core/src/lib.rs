pub mod binder;
pub mod channel;
pub mod process;
pub mod system;
