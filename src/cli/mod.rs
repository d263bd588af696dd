use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tally::{catalog::Catalog, config::Config};

mod batch;
mod order;

/// Printed in place of a report when an order's client doesn't exist.
const CLIENT_NOT_FOUND: &str = "Client not found, cannot proceed with order.";

#[derive(Debug, Parser)]
#[command(name = "tally", about = "Wholesale order pricing", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price a single order
    Order(order::OrderCommand),

    /// Price every order in a file
    Batch(batch::BatchCommand),
}

impl Cli {
    pub(crate) fn run(self, out: &mut impl io::Write) -> anyhow::Result<()> {
        let catalog = Catalog::from_path(&self.config.catalog).with_context(|| {
            format!("failed to load catalog from {}", self.config.catalog.display())
        })?;

        match self.command {
            Commands::Order(command) => order::run(&command, &self.config, &catalog, out),
            Commands::Batch(command) => batch::run(&command, &self.config, &catalog, out),
        }
    }
}
