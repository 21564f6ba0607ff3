use std::io;

use anyhow::Context;
use tracing::info;
use wifibind_common::config::Config;

use crate::commands::system_channel;

pub fn serve(cfg: &Config) -> anyhow::Result<()> {
    let channel = system_channel(cfg);
    info!("Serving '{}' on stdin", channel.name());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let handled = channel
        .serve(stdin.lock(), stdout.lock())
        .context("serving commands")?;

    info!("Input closed after {handled} command(s)");
    Ok(())
}
