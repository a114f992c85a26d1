use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use wowtime::input::parse_timestamp;
use wowtime::logging;
use wowtime::timefmt::{format_date_zoned, Zone};

#[derive(Parser)]
#[command(name = "wowtime")]
#[command(about = "Format millisecond timestamps as long US dates", long_about = None)]
struct Cli {
    /// Timestamps in milliseconds since epoch. Read from stdin (one per line) if omitted.
    #[arg(allow_negative_numbers = true)]
    timestamps: Vec<String>,

    /// Interpret timestamps in UTC instead of the local timezone
    #[arg(long, env = "WOWTIME_UTC")]
    utc: bool,

    /// Print one JSON object per timestamp
    #[arg(long)]
    json: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, env = "WOWTIME_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct FormattedDate<'a> {
    input: &'a str,
    timestamp: Option<i64>,
    formatted: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_file.as_deref())?;

    let zone = if cli.utc { Zone::Utc } else { Zone::Local };
    tracing::debug!(?zone, json = cli.json, "starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.timestamps.is_empty() {
        run(std::io::stdin().lock(), &mut out, zone, cli.json)?;
    } else {
        for raw in &cli.timestamps {
            emit(&mut out, raw, zone, cli.json)?;
        }
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Format one timestamp per input line, stopping at the first bad line.
fn run(input: impl BufRead, out: &mut impl Write, zone: Zone, json: bool) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read timestamp from stdin")?;
        emit(out, &line, zone, json)?;
    }
    Ok(())
}

fn emit(out: &mut impl Write, raw: &str, zone: Zone, json: bool) -> Result<()> {
    let timestamp = parse_timestamp(raw)?;
    let formatted = format_date_zoned(timestamp, zone);
    tracing::debug!(input = raw.trim(), %formatted, "formatted timestamp");

    if json {
        let record = FormattedDate {
            input: raw.trim(),
            timestamp,
            formatted,
        };
        let line = serde_json::to_string(&record).context("Failed to serialize result")?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", formatted)?;
    }
    Ok(())
}
