use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FormatArgs, ParseArgs, RecordCommands, WireCommands};

/// Timezone-aware timestamp conversion and storage
///
/// tzlab converts between epoch-millisecond instants, local date-time text
/// and seconds/nanos wire timestamps. Every conversion uses the zone given
/// with --zone; the process time zone (TZ) is never consulted.
#[derive(Parser)]
#[command(version, about, name = "tzlab")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tzlab/tzlab.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// IANA time zone used for local fields (e.g. America/Los_Angeles)
    #[arg(long, short, global = true, default_value = "UTC")]
    pub zone: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the tzlab CLI
///
/// Without a subcommand, tzlab prints the current time in `--zone`.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse local date-time text into an instant
    #[command(alias = "p")]
    Parse(ParseArgs),
    /// Format an instant as local date-time text
    #[command(alias = "f")]
    Format(FormatArgs),
    /// Convert between instants and seconds/nanos wire timestamps
    #[command(alias = "w")]
    Wire {
        #[command(subcommand)]
        command: WireCommands,
    },
    /// Store and inspect timestamp records
    #[command(alias = "r")]
    Record {
        #[command(subcommand)]
        command: RecordCommands,
    },
}
