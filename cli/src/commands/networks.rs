use colored::*;
use wifibind_common::config::Config;
use wifibind_common::network::Transport;
use wifibind_core::binder::NetworkReport;

use crate::commands::system_binder;
use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

pub fn networks(cfg: &Config) -> anyhow::Result<()> {
    let binder = system_binder(cfg);
    let reports: Vec<NetworkReport> = binder.survey();

    print::header("known networks", cfg.quiet);
    if reports.is_empty() {
        print::print_status("No networks are up");
        return Ok(());
    }

    for (idx, report) in reports.iter().enumerate() {
        print::tree_head(idx, report.network.name());
        print::as_tree_one_level(details(report));
    }

    print::fat_separator(cfg.quiet);
    match binder.select_wifi_network() {
        Ok(network) => print::aligned_line("WiFi", &network),
        Err(e) => print::aligned_line("WiFi", e),
    }
    Ok(())
}

fn details(report: &NetworkReport) -> Vec<Detail> {
    let index: Detail = ("Index".to_string(), report.network.index().to_string().normal());
    let transports: ColoredString = match &report.capabilities {
        Some(caps) if caps.has_transport(Transport::Wifi) => caps.to_string().color(colors::WIFI),
        Some(caps) => caps.to_string().normal(),
        None => "gone".dimmed(),
    };
    vec![index, ("Transport".to_string(), transports)]
}
