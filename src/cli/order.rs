use std::io;

use clap::Args;
use tally::{catalog::Catalog, config::Config, report, service::OrderService};

use super::CLIENT_NOT_FOUND;

#[derive(Debug, Args)]
pub(super) struct OrderCommand {
    /// Order descriptor: "<client>,<product>=<quantity>[,<product>=<quantity>...]"
    descriptor: String,
}

pub(super) fn run(
    command: &OrderCommand,
    config: &Config,
    catalog: &Catalog,
    out: &mut impl io::Write,
) -> anyhow::Result<()> {
    let service = OrderService::new(catalog, catalog, catalog.currency());

    match service.process_order(&command.descriptor)? {
        Some(order) => report::write_order(out, config.format, &order, catalog)?,
        None => writeln!(out, "{CLIENT_NOT_FOUND}")?,
    }

    Ok(())
}
