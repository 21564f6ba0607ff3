pub mod config;
pub mod connectivity;
pub mod error;
pub mod network;
