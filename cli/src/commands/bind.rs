use wifibind_common::config::Config;
use wifibind_core::channel::{BIND_TO_WIFI, MethodResult};

use crate::commands::{system_binder, system_channel};
use crate::terminal::print;

/// Binds this process to WiFi and reports the outcome.
///
/// The binding lasts only as long as this process, so this mostly answers
/// "would binding work here, and which network would it use".
pub fn bind(dry_run: bool, cfg: &Config) -> anyhow::Result<()> {
    if dry_run {
        let network = system_binder(cfg).select_wifi_network()?;
        print::aligned_line("Selected", &network);
        return Ok(());
    }

    let channel = system_channel(cfg);
    match channel.handle(BIND_TO_WIFI) {
        MethodResult::Success => {
            if let Some(network) = channel.binder().bound_network() {
                print::aligned_line("Bound to", &network);
            }
            Ok(())
        }
        failure => anyhow::bail!("{failure}"),
    }
}
