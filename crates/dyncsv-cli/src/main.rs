use std::io::{BufWriter, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use dyncsv::{Row, SEPARATOR, Table};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Values joined by the separator
    Display,
    /// name=value pairs
    Debug,
    /// Array of row objects
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "dyncsv",
    about = "Print the rows of a header-driven CSV file",
    version
)]
struct Args {
    /// Output format for each row
    #[arg(short, long, value_enum, default_value_t = Format::Display)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Only print these columns (repeatable)
    #[arg(short, long = "column", value_name = "NAME")]
    columns: Vec<String>,

    /// Print row and line counts instead of rows (a JSON object with --format json)
    #[arg(long, default_value_t = false)]
    count: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

#[derive(Serialize)]
struct Summary {
    rows: usize,
    lines: usize,
    columns: usize,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let table = match &args.input {
        Some(path) => Table::load(path)?,
        None => Table::from_reader(stdin().lock())?,
    };
    info!(rows = table.len(), "input loaded");

    let mut out = BufWriter::new(stdout().lock());

    if args.count {
        let summary = Summary {
            rows: table.len(),
            lines: table.row_count(),
            columns: table.headers().len(),
        };
        match args.format {
            Format::Json => writeln!(out, "{}", to_json(&summary, args.pretty)?)?,
            _ => writeln!(
                out,
                "rows={} lines={} columns={}",
                summary.rows, summary.lines, summary.columns
            )?,
        }
        out.flush()?;
        return Ok(());
    }

    let positions = resolve_columns(&table, &args.columns)?;

    match args.format {
        Format::Display => {
            for row in &table {
                match &positions {
                    Some(p) => writeln!(out, "{}", project(row, p, |_, v| v.to_string()))?,
                    None => writeln!(out, "{row}")?,
                }
            }
        }
        Format::Debug => {
            for row in &table {
                match &positions {
                    Some(p) => writeln!(out, "{}", project(row, p, |n, v| format!("{n}={v}")))?,
                    None => writeln!(out, "{}", row.debug_string())?,
                }
            }
        }
        Format::Json => {
            let value = match &positions {
                Some(p) => serde_json::Value::Array(
                    table
                        .iter()
                        .map(|row| {
                            let obj: serde_json::Map<String, serde_json::Value> = p
                                .iter()
                                .map(|&i| {
                                    (table.headers()[i].clone(), serde_json::Value::from(&row[i]))
                                })
                                .collect();
                            serde_json::Value::Object(obj)
                        })
                        .collect(),
                ),
                None => serde_json::to_value(&table)?,
            };
            writeln!(out, "{}", to_json(&value, args.pretty)?)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(s)
}

/// Map requested column names to header positions. `None` means all columns.
fn resolve_columns(table: &Table, names: &[String]) -> Result<Option<Vec<usize>>> {
    if names.is_empty() {
        return Ok(None);
    }
    let mut positions = Vec::with_capacity(names.len());
    for name in names {
        match table.header().position(name) {
            Some(i) => positions.push(i),
            None => bail!("unknown column: {name}"),
        }
    }
    Ok(Some(positions))
}

fn project(row: &Row, positions: &[usize], cell: impl Fn(&str, &str) -> String) -> String {
    let header = row.header();
    let sep = SEPARATOR.to_string();
    let parts: Vec<String> = positions
        .iter()
        .map(|&i| cell(header[i].as_str(), &row[i]))
        .collect();
    parts.join(sep.as_str())
}
