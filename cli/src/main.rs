mod commands;
mod terminal;

use commands::{CommandLine, Commands, bind, call, networks, probe, serve};
use std::time::Duration;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(cfg.quiet);

    match commands.command {
        Commands::Bind { dry_run } => {
            print::banner(cfg.quiet);
            bind::bind(dry_run, &cfg)
        }
        Commands::Call { method } => call::call(&method, &cfg),
        Commands::Networks => {
            print::banner(cfg.quiet);
            networks::networks(&cfg)
        }
        Commands::Serve => serve::serve(&cfg),
        Commands::Probe { addr, timeout_ms } => {
            print::banner(cfg.quiet);
            probe::probe(addr, Duration::from_millis(timeout_ms), &cfg).await
        }
    }
}
