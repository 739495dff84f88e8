//! Subcommand arguments and their handlers.
//!
//! Clap-facing argument structs live here next to the conversions that turn
//! them into core types, so `tzlab_core` stays free of clap derives.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use tzlab_core::{
    convert,
    display::{OperationStatus, RecordView, Records, SavedRecord, ZonedDateTime},
    Disambiguation, Instant, JsonMapper, RecordStore, TimeZoneId, TimestampConverter,
    TimestampRecord, WireTimestamp, LOCAL_PATTERN,
};

use crate::renderer::TerminalRenderer;

#[derive(Args)]
pub struct ParseArgs {
    #[arg(help = "Date-time text to parse, e.g. 2022-08-23T07:00:00.000")]
    pub text: String,
    #[arg(
        short,
        long,
        default_value = LOCAL_PATTERN,
        help = "Pattern the text is written in"
    )]
    pub pattern: String,
    #[arg(
        long,
        value_enum,
        default_value_t = PolicyArg::Compatible,
        help = "How to resolve local times in a DST gap or overlap"
    )]
    pub policy: PolicyArg,
}

#[derive(Args)]
pub struct FormatArgs {
    #[arg(allow_negative_numbers = true, help = "Milliseconds since the Unix epoch")]
    pub millis: i64,
    #[arg(
        short,
        long,
        default_value = LOCAL_PATTERN,
        help = "Pattern to format the local fields with"
    )]
    pub pattern: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    Compatible,
    Earlier,
    Later,
    Reject,
}

impl From<PolicyArg> for Disambiguation {
    fn from(val: PolicyArg) -> Self {
        match val {
            PolicyArg::Compatible => Disambiguation::Compatible,
            PolicyArg::Earlier => Disambiguation::Earlier,
            PolicyArg::Later => Disambiguation::Later,
            PolicyArg::Reject => Disambiguation::Reject,
        }
    }
}

impl std::fmt::Display for PolicyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Disambiguation::from(*self))
    }
}

#[derive(Subcommand)]
pub enum WireCommands {
    /// Split an instant into seconds and nanoseconds
    #[command(name = "to", alias = "t")]
    ToWire {
        #[arg(allow_negative_numbers = true, help = "Milliseconds since the Unix epoch")]
        millis: i64,
    },
    /// Rebuild an instant from seconds and nanoseconds
    #[command(name = "from", alias = "f")]
    FromWire {
        #[arg(allow_negative_numbers = true, help = "Whole seconds since the Unix epoch")]
        seconds: i64,
        #[arg(help = "Nanosecond remainder, 0 to 999999999")]
        nanos: i32,
    },
}

#[derive(Args)]
pub struct AddRecordArgs {
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Epoch millis for the timestamp column"
    )]
    pub ts: Option<i64>,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Epoch millis for the date-time column"
    )]
    pub dt: Option<i64>,
}

impl TryFrom<AddRecordArgs> for TimestampRecord {
    type Error = tzlab_core::ConversionError;

    fn try_from(val: AddRecordArgs) -> Result<Self, Self::Error> {
        Ok(TimestampRecord {
            id: None,
            ts_value: val.ts.map(Instant::from_millis).transpose()?,
            dt_value: val.dt.map(Instant::from_millis).transpose()?,
        })
    }
}

#[derive(Args)]
pub struct RecordIdArgs {
    #[arg(help = "Unique identifier of the record")]
    pub id: u64,
}

#[derive(Args)]
pub struct RecordJsonArgs {
    #[arg(help = "Unique identifier of the record to serialize")]
    pub id: u64,
    #[arg(long, help = "Pretty-print the JSON document")]
    pub pretty: bool,
}

#[derive(Subcommand)]
pub enum RecordCommands {
    /// Save a new record
    #[command(alias = "a")]
    Add(AddRecordArgs),
    /// Show one record in the selected zone
    #[command(alias = "s")]
    Show(RecordIdArgs),
    /// List all records ordered by instant
    #[command(aliases = ["l", "ls"])]
    List,
    /// Delete a record
    #[command(aliases = ["d", "rm"])]
    Delete(RecordIdArgs),
    /// Print a record as JSON with offsets for the selected zone
    #[command(alias = "j")]
    Json(RecordJsonArgs),
}

/// Runs subcommands against one zone and renders their output.
pub struct Cli {
    renderer: TerminalRenderer,
    zone: TimeZoneId,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, zone: TimeZoneId) -> Self {
        Self { renderer, zone }
    }

    /// Parses text in the configured zone and prints the instant.
    pub fn handle_parse(&self, args: ParseArgs) -> Result<()> {
        let converter = TimestampConverter::builder()
            .pattern(args.pattern)
            .zone(self.zone.clone())
            .disambiguation(args.policy.into())
            .build()?;

        debug!(
            "Parsing {:?} in {} with policy {}",
            args.text,
            self.zone,
            converter.disambiguation()
        );

        let instant = converter.parse(&args.text)?;
        self.renderer.render(&format!(
            "- **millis**: {}\n- **utc**: {}\n",
            instant.as_millis(),
            instant
        ))
    }

    /// Formats an instant in the configured zone.
    pub fn handle_format(&self, args: FormatArgs) -> Result<()> {
        let instant = Instant::from_millis(args.millis)?;
        let text = convert::format(instant, &args.pattern, self.zone.as_str())?;
        self.renderer.render_verbatim(&text)
    }

    pub fn handle_wire_command(&self, command: WireCommands) -> Result<()> {
        match command {
            WireCommands::ToWire { millis } => {
                let wire = convert::to_wire_timestamp(Instant::from_millis(millis)?);
                let json =
                    serde_json::to_string(&wire).context("Failed to serialize wire timestamp")?;
                self.renderer.render_verbatim(&json)
            }
            WireCommands::FromWire { seconds, nanos } => {
                let instant = convert::from_wire_timestamp(WireTimestamp::new(seconds, nanos)?)?;
                self.renderer
                    .render_verbatim(&instant.as_millis().to_string())
            }
        }
    }

    /// Runs a record subcommand against `store`.
    pub async fn handle_record_command(
        &self,
        store: &RecordStore,
        command: RecordCommands,
    ) -> Result<()> {
        let zone = self.zone.resolve()?;

        match command {
            RecordCommands::Add(args) => {
                let record = TimestampRecord::try_from(args)?;
                let saved = store.save(&record).await?;
                self.renderer
                    .render(&SavedRecord(RecordView::new(&saved, &zone)).to_string())
            }
            RecordCommands::Show(RecordIdArgs { id }) => match store.find(id).await? {
                Some(record) => self
                    .renderer
                    .render(&RecordView::new(&record, &zone).to_string()),
                None => self
                    .renderer
                    .render(&OperationStatus::failure(format!("Record {id} not found")).to_string()),
            },
            RecordCommands::List => {
                let records = store.list().await?;
                self.renderer
                    .render(&Records::new(&records, &zone).to_string())
            }
            RecordCommands::Delete(RecordIdArgs { id }) => {
                let removed = store.delete(id).await?;
                self.renderer
                    .render(&OperationStatus::deleted(id, removed).to_string())
            }
            RecordCommands::Json(RecordJsonArgs { id, pretty }) => {
                let Some(record) = store.find(id).await? else {
                    return self.renderer.render(
                        &OperationStatus::failure(format!("Record {id} not found")).to_string(),
                    );
                };
                let mapper = JsonMapper::new(self.zone.clone())?;
                let json = if pretty {
                    mapper.to_json_pretty(&record)?
                } else {
                    mapper.to_json(&record)?
                };
                self.renderer.render_verbatim(&json)
            }
        }
    }

    /// Renders the current time in the configured zone.
    pub fn show_now(&self) -> Result<()> {
        let zone = self.zone.resolve()?;
        let now = Instant::now()?;
        self.renderer.render(&format!(
            "- **{}**: {}\n- **millis**: {}\n",
            self.zone,
            ZonedDateTime::new(&now, &zone),
            now.as_millis()
        ))
    }
}
