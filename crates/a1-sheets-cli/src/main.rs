//! A1 Sheets CLI - range notation and batch plan tool

use a1_sheets::codec::{decode_column, encode_column};
use a1_sheets::prelude::*;
use a1_sheets::{
    BatchOptions, DateTimeRenderOption, Operation, ValueInputOption, ValueRenderOption,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use serde_json::json;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "a1")]
#[command(author, version, about = "A1 range notation and batch plan tool")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse ranges and show their structure
    Parse {
        /// Ranges in A1 notation (e.g. "Sheet1!B2:C5", "B:D", "3:3")
        #[arg(required = true)]
        ranges: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Convert between column labels and column indices
    #[command(alias = "col")]
    Column {
        /// Labels ("AA") or 1-based indices ("27")
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Convert a range between A1 and R1C1 notation
    Convert {
        range: String,

        /// Target notation
        #[arg(long, value_enum, default_value = "r1c1")]
        to: Notation,
    },

    /// Show where a range moves after an insertion or deletion
    Shift {
        /// Range in A1 notation
        range: String,

        /// Kind of edit
        #[arg(value_enum)]
        edit: EditKind,

        /// Axis to edit
        #[arg(short, long, default_value = "ROWS")]
        dimension: Dimension,

        /// First line of the edit (1-based)
        #[arg(long)]
        at: u32,

        /// Number of lines inserted or deleted
        #[arg(short, long, default_value = "1")]
        count: u32,
    },

    /// Dry-run a batch plan and print the request it would send
    Plan {
        /// Plan file (JSON), or "-" for stdin
        input: PathBuf,

        /// How written values are interpreted (RAW or USER_ENTERED)
        #[arg(long, default_value = "USER_ENTERED")]
        value_input_option: ValueInputOption,

        /// How read values are rendered (FORMATTED_VALUE, UNFORMATTED_VALUE or FORMULA)
        #[arg(long, default_value = "FORMATTED_VALUE")]
        value_render_option: ValueRenderOption,

        /// How dates and times are rendered (SERIAL_NUMBER or FORMATTED_STRING)
        #[arg(long, default_value = "SERIAL_NUMBER")]
        date_time_render_option: DateTimeRenderOption,

        /// Echo written values back in the response
        #[arg(long)]
        include_values: bool,

        /// Reject reduce/reshape edits that cut into preserved ranges
        #[arg(long)]
        enforce_preserved: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Notation {
    A1,
    R1c1,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EditKind {
    Insert,
    Delete,
}

/// A batch plan: the sheet it targets, ranges to follow, and operations
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Plan {
    sheet: SheetHandle,
    #[serde(default)]
    track: Vec<CellRange>,
    #[serde(default)]
    preserve: Vec<CellRange>,
    operations: Vec<Operation>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse { ranges, json } => parse_ranges(&ranges, json),
        Commands::Column { values } => convert_columns(&values),
        Commands::Convert { range, to } => convert_range(&range, to),
        Commands::Shift {
            range,
            edit,
            dimension,
            at,
            count,
        } => shift(&range, edit, dimension, at, count),
        Commands::Plan {
            input,
            value_input_option,
            value_render_option,
            date_time_render_option,
            include_values,
            enforce_preserved,
        } => run_plan(
            &input,
            BatchOptions {
                value_input_option,
                value_render_option,
                date_time_render_option,
                include_values_in_response: include_values,
                enforce_preserved_extent: enforce_preserved,
                ..BatchOptions::default()
            },
        ),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn parse_ranges(ranges: &[String], as_json: bool) -> Result<()> {
    for text in ranges {
        let range =
            CellRange::parse(text).with_context(|| format!("Failed to parse '{}'", text))?;

        if as_json {
            println!("{}", describe_json(&range));
            continue;
        }

        println!("{}", range);
        println!("  Sheet: {}", range.sheet().unwrap_or("(current)"));
        println!("  Start: {}", describe_address(range.start()));
        println!("  End:   {}", describe_address(range.end()));
        println!("  Rows:  {}", describe_count(range.row_count().map(u64::from)));
        println!("  Cols:  {}", describe_count(range.col_count().map(u64::from)));
        println!("  Cells: {}", describe_count(range.cell_count()));
    }
    Ok(())
}

fn describe_json(range: &CellRange) -> serde_json::Value {
    let (start, end) = (range.start(), range.end());
    json!({
        "range": range,
        "sheet": range.sheet(),
        "start": {"column": start.col, "row": start.row},
        "end": {"column": end.col, "row": end.row},
        "rowCount": range.row_count(),
        "columnCount": range.col_count(),
        "cellCount": range.cell_count(),
        "r1c1": range.to_r1c1(),
    })
}

fn describe_address(addr: CellAddress) -> String {
    let col = addr
        .col
        .map_or_else(|| "unbounded".to_string(), |c| c.to_string());
    let row = addr
        .row
        .map_or_else(|| "unbounded".to_string(), |r| r.to_string());
    format!("column {}, row {}", col, row)
}

fn describe_count(count: Option<u64>) -> String {
    count.map_or_else(|| "unbounded".to_string(), |n| n.to_string())
}

fn convert_columns(values: &[String]) -> Result<()> {
    for value in values {
        println!("{}\t{}", value, convert_column(value)?);
    }
    Ok(())
}

fn convert_column(value: &str) -> Result<String> {
    let value = value.trim();
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        let index: u32 = value
            .parse()
            .with_context(|| format!("Column index '{}' is too large", value))?;
        Ok(encode_column(index)?)
    } else {
        Ok(decode_column(value)
            .with_context(|| format!("Invalid column label '{}'", value))?
            .to_string())
    }
}

fn convert_range(text: &str, to: Notation) -> Result<()> {
    let converted = match to {
        Notation::R1c1 => CellRange::parse(text)
            .with_context(|| format!("Failed to parse A1 range '{}'", text))?
            .to_r1c1(),
        Notation::A1 => CellRange::parse_r1c1(text)
            .with_context(|| format!("Failed to parse R1C1 range '{}'", text))?
            .to_a1_string(),
    };
    println!("{}", converted);
    Ok(())
}

fn shift(text: &str, edit: EditKind, dimension: Dimension, at: u32, count: u32) -> Result<()> {
    let range = CellRange::parse(text).with_context(|| format!("Failed to parse '{}'", text))?;
    let edit = match edit {
        EditKind::Insert => RangeEdit::insert(dimension, at, count),
        EditKind::Delete => RangeEdit::delete(dimension, at, count),
    };

    match shift_range(&range, &edit) {
        Ok(shifted) => println!("{}", shifted),
        Err(Error::RangeCollapsed(collapsed)) => {
            bail!("'{}' is deleted entirely (collapses to {})", range, collapsed)
        }
        Err(err) => return Err(err).context("Failed to shift range"),
    }
    Ok(())
}

fn read_plan(input: &Path) -> Result<Plan> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read plan from stdin")?;
        text
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read '{}'", input.display()))?
    };
    serde_json::from_str(&text).context("Failed to parse plan")
}

fn run_plan(input: &Path, options: BatchOptions) -> Result<()> {
    let plan = read_plan(input)?;
    let report = dry_run(plan, options)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Queue a plan against an in-process transport and report what would be sent
fn dry_run(plan: Plan, options: BatchOptions) -> Result<serde_json::Value> {
    let Plan {
        mut sheet,
        track,
        preserve,
        operations,
    } = plan;
    let session = StaticSession::new("dry-run");
    let mut transport = RecordingTransport::new();

    let mut batch = sheet.batch_with(options);
    let mut ids = Vec::new();
    for range in track {
        ids.push(batch.track(range));
    }
    for range in preserve {
        ids.push(batch.track_preserved(range));
    }

    for (i, operation) in operations.into_iter().enumerate() {
        let label = operation.to_string();
        batch
            .append(operation)
            .with_context(|| format!("Operation {} ({}) rejected", i + 1, label))?;
    }
    tracing::info!("Plan queued {} operation(s)", batch.len());

    batch
        .execute(&session, &mut transport)
        .context("Dry run failed")?;

    let tracked: Vec<String> = ids
        .iter()
        .filter_map(|id| batch.tracked(*id).map(|r| r.to_string()))
        .collect();
    drop(batch);

    let request = match transport.last_request() {
        Some(request) => serde_json::to_value(request)?,
        None => serde_json::Value::Null,
    };
    if request.is_null() {
        tracing::warn!("Plan produced no operations");
    }

    Ok(json!({
        "request": request,
        "shape": sheet.shape(),
        "tracked": tracked,
    }))
}
