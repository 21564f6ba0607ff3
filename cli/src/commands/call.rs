use wifibind_common::config::Config;

use crate::commands::system_channel;

/// Dispatches `method` and writes the reply line to stdout.
pub fn call(method: &str, cfg: &Config) -> anyhow::Result<()> {
    let reply = system_channel(cfg).handle(method);
    println!("{reply}");

    if !reply.is_success() {
        anyhow::bail!("'{method}' did not succeed");
    }
    Ok(())
}
