//! Tabular CLI - inspect, slice and convert delimited text files
//!
//! # Commands
//!
//! ```bash
//! tabular describe weather.csv                          # Header, row and column counts
//! tabular select weather.csv --columns month,tempature  # Pick columns, emit CSV
//! tabular select weather.csv --slice 1:-1 -o out.csv    # Pick rows, write to file
//! tabular convert weather.csv --columns tempature --row -1 --to float --shape scalar
//! ```
//!
//! Read flags (`--separator`, `--new-line`, `--no-header`, `--no-trim`,
//! `--options file.json`) apply to every command. Set `RUST_LOG` or pass
//! `--verbose` for diagnostics.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use tabular::{
    read_csv, Axis, FromCell, ReadArgument, ReadOptions, Table, WriteOptions,
};

#[derive(Parser)]
#[command(name = "tabular")]
#[command(about = "Inspect, slice and convert delimited text tables", long_about = None)]
struct Cli {
    #[command(flatten)]
    read: ReadArgs,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ReadArgs {
    /// Cell separator (default: ",")
    #[arg(short, long, global = true)]
    separator: Option<String>,

    /// Line terminator; accepts \n, \r\n and \t escapes (default: platform)
    #[arg(long, global = true)]
    new_line: Option<String>,

    /// First line is data, not column names
    #[arg(long, global = true)]
    no_header: bool,

    /// Keep whitespace around cells
    #[arg(long, global = true)]
    no_trim: bool,

    /// JSON file with read options, e.g. {"SEPARATOR": ";"}
    #[arg(long, global = true)]
    options: Option<PathBuf>,
}

#[derive(Args)]
struct SelectionArgs {
    /// Columns to keep, comma separated, in output order
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Single row; negative counts from the end
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "slice")]
    row: Option<isize>,

    /// Row range START:END, end exclusive; either side may be omitted or negative
    #[arg(long, allow_hyphen_values = true, value_parser = parse_slice)]
    slice: Option<SliceSpec>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print column names, row count and column count
    Describe {
        /// Input file
        input: PathBuf,
    },

    /// Select columns and rows and emit delimited text
    Select {
        /// Input file
        input: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Append to the output file instead of overwriting it
        #[arg(long, requires = "output")]
        append: bool,

        /// Leave the header line out of the output
        #[arg(long)]
        no_header_out: bool,

        /// Output separator (default: ",")
        #[arg(long)]
        out_separator: Option<String>,
    },

    /// Convert the selection to typed values and print them as JSON
    Convert {
        /// Input file
        input: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Target cell type
        #[arg(long, value_enum, default_value_t = Target::Text)]
        to: Target,

        /// Output shape
        #[arg(long, value_enum, default_value_t = Shape::Matrix)]
        shape: Shape,

        /// Axis for --shape vector (default: row if one row, else column)
        #[arg(long, value_enum)]
        axis: Option<AxisArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Int,
    Float,
    Text,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    Scalar,
    Vector,
    Matrix,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    Row,
    Column,
}

impl From<AxisArg> for Axis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Row => Axis::Row,
            AxisArg::Column => Axis::Column,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct SliceSpec {
    start: Option<isize>,
    end: Option<isize>,
}

fn parse_slice(s: &str) -> Result<SliceSpec, String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got '{}'", s))?;
    let bound = |part: &str| -> Result<Option<isize>, String> {
        let part = part.trim();
        if part.is_empty() {
            return Ok(None);
        }
        part.parse()
            .map(Some)
            .map_err(|e| format!("invalid slice bound '{}': {}", part, e))
    };
    Ok(SliceSpec {
        start: bound(start)?,
        end: bound(end)?,
    })
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Describe { input } => cmd_describe(input, &cli.read),

        Commands::Select {
            input,
            selection,
            output,
            append,
            no_header_out,
            out_separator,
        } => cmd_select(
            input,
            &cli.read,
            selection,
            output.as_deref(),
            *append,
            *no_header_out,
            out_separator.as_deref(),
        ),

        Commands::Convert {
            input,
            selection,
            to,
            shape,
            axis,
        } => cmd_convert(input, &cli.read, selection, *to, *shape, *axis),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merge the options file (if any) with command-line flags; flags win.
fn read_options(args: &ReadArgs) -> Result<ReadOptions, Box<dyn std::error::Error>> {
    let mut options: ReadOptions = match &args.options {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        None => ReadOptions::new(),
    };

    if let Some(separator) = &args.separator {
        options.insert(ReadArgument::Separator, unescape(separator));
    }
    if let Some(new_line) = &args.new_line {
        options.insert(ReadArgument::NewLine, unescape(new_line));
    }
    if args.no_header {
        options.insert(ReadArgument::HeaderPresent, false);
    }
    if args.no_trim {
        options.insert(ReadArgument::AutoTrim, false);
    }
    Ok(options)
}

fn unescape(s: &str) -> String {
    s.replace("\\r", "\r").replace("\\n", "\n").replace("\\t", "\t")
}

fn load(input: &Path, args: &ReadArgs) -> Result<Table, Box<dyn std::error::Error>> {
    let options = read_options(args)?;
    eprintln!("📄 Reading: {}", input.display());
    Ok(read_csv(input, &options)?)
}

fn apply_selection(table: Table, selection: &SelectionArgs) -> Result<Table, Box<dyn std::error::Error>> {
    let table = if selection.columns.is_empty() {
        table
    } else {
        table.columns(selection.columns.as_slice())?
    };

    let table = match (selection.row, selection.slice) {
        (Some(row), _) => table.row(row)?,
        (None, Some(spec)) => {
            let len = table.row_count() as isize;
            table.slice(spec.start.unwrap_or(0), spec.end.unwrap_or(len))?
        }
        (None, None) => table,
    };
    Ok(table)
}

fn cmd_describe(input: &Path, read: &ReadArgs) -> Result<(), Box<dyn std::error::Error>> {
    let table = load(input, read)?;
    table.describe();
    Ok(())
}

fn cmd_select(
    input: &Path,
    read: &ReadArgs,
    selection: &SelectionArgs,
    output: Option<&Path>,
    append: bool,
    no_header_out: bool,
    out_separator: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = apply_selection(load(input, read)?, selection)?;
    eprintln!("   Selected {} rows x {} columns", table.row_count(), table.column_count());

    let options = WriteOptions {
        append,
        header: !no_header_out,
        separator: out_separator.map(unescape).unwrap_or_else(|| ",".to_string()),
        ..Default::default()
    };

    match output {
        Some(path) => {
            table.to_csv(path, &options)?;
            eprintln!("💾 Output written to: {}", path.display());
        }
        None => println!("{}", table.to_csv_string(&options)),
    }
    Ok(())
}

fn cmd_convert(
    input: &Path,
    read: &ReadArgs,
    selection: &SelectionArgs,
    to: Target,
    shape: Shape,
    axis: Option<AxisArg>,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = apply_selection(load(input, read)?, selection)?;
    let axis = axis.map(Axis::from);

    let json = match to {
        Target::Int => convert_json::<i64>(&table, shape, axis)?,
        Target::Float => convert_json::<f64>(&table, shape, axis)?,
        Target::Text => convert_json::<String>(&table, shape, axis)?,
    };
    println!("{}", json);
    Ok(())
}

fn convert_json<T: FromCell + Serialize>(
    table: &Table,
    shape: Shape,
    axis: Option<Axis>,
) -> Result<String, Box<dyn std::error::Error>> {
    let json = match shape {
        Shape::Scalar => serde_json::to_string(&table.as_scalar::<T>()?)?,
        Shape::Vector => {
            let values = match axis {
                Some(axis) => table.to_vector::<T>(axis)?,
                None => table.to_flat_vector::<T>()?,
            };
            serde_json::to_string(&values)?
        }
        Shape::Matrix => serde_json::to_string_pretty(&table.to_matrix::<T>())?,
    };
    Ok(json)
}
