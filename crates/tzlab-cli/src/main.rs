//! tzlab CLI Application
//!
//! Command-line front end for the tzlab timestamp toolkit. Conversion
//! commands run synchronously and never touch the database; record commands
//! open the store on demand.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tzlab_core::{RecordStoreBuilder, TimeZoneId};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        zone,
        command,
    } = Args::parse();

    let zone: TimeZoneId = zone.parse().context("Invalid --zone")?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("tzlab started in zone {zone}");

    let cli = Cli::new(renderer, zone);

    match command {
        Some(Parse(args)) => cli.handle_parse(args),
        Some(Format(args)) => cli.handle_format(args),
        Some(Wire { command }) => cli.handle_wire_command(command),
        Some(Record { command }) => {
            let store = RecordStoreBuilder::new()
                .with_database_path(database_file)
                .build()
                .await
                .context("Failed to initialize record store")?;
            cli.handle_record_command(&store, command).await
        }
        None => cli.show_now(),
    }
}
