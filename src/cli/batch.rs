use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Args;
use tally::{
    batch::load_descriptors, catalog::Catalog, config::Config, report, service::OrderService,
};

use super::CLIENT_NOT_FOUND;

#[derive(Debug, Args)]
pub(super) struct BatchCommand {
    /// JSON array (or YAML sequence, for .yml/.yaml files) of order descriptors
    #[arg(long)]
    file: PathBuf,
}

pub(super) fn run(
    command: &BatchCommand,
    config: &Config,
    catalog: &Catalog,
    out: &mut impl io::Write,
) -> anyhow::Result<()> {
    let descriptors = load_descriptors(&command.file)
        .with_context(|| format!("failed to load orders from {}", command.file.display()))?;

    let service = OrderService::new(catalog, catalog, catalog.currency());

    for outcome in service.process_batch(&descriptors) {
        match outcome.result {
            Ok(Some(order)) => report::write_order(out, config.format, &order, catalog)?,
            Ok(None) => writeln!(out, "{CLIENT_NOT_FOUND}")?,
            Err(error) => writeln!(out, "Failed to process order '{}': {error}", outcome.input)?,
        }

        writeln!(out)?;
    }

    Ok(())
}
