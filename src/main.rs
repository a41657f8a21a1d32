//! codesize - count files, lines and bytes of source code per extension.
//!
//! Usage:
//!   codesize -d <DIR>                     Table of every extension under DIR
//!   codesize -d <DIR> -e rs toml          Only .rs and .toml files
//!   codesize -d <DIR> -x target vendor    Skip paths relative to DIR
//!   codesize -d <DIR> -p lines            Print just the total line count
//!   codesize -d <DIR> -f json             Full report as JSON
//!   codesize --help                       Show help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use codesize_core::display_label;
use codesize_scan::{CountConfig, ExtensionTotals, SizeReport, TreeAggregator};

#[derive(Parser)]
#[command(
    name = "codesize",
    version,
    about = "Calculate the total size (files, lines of code and KB) of a program's code",
    long_about = "codesize walks a directory recursively and totals the files, lines and \
                  bytes of every matching file, grouped by file extension.\n\n\
                  Files that cannot be read as UTF-8 text are skipped."
)]
struct Cli {
    /// Directory to search, absolute or relative
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,

    /// Extensions to count, without the dot (e.g. "py", not ".py"); all files when omitted
    #[arg(short, long = "extension", num_args = 1..)]
    extensions: Vec<String>,

    /// Files and directories to exclude, relative to --directory
    #[arg(short = 'x', long = "exclude", num_args = 1..)]
    exclude: Vec<PathBuf>,

    /// Print progress (e.g. "file XXX processed")
    #[arg(short, long)]
    log: bool,

    /// Print only the selected total
    #[arg(short, long)]
    print: Option<Selection>,

    /// Output format for the full report
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

/// A single total to print instead of the full report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Selection {
    /// Total size in kilobytes
    #[value(name = "kb_size")]
    KbSize,
    /// Total lines of code
    Lines,
    /// Total number of files
    Files,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON shape of the full report.
#[derive(Serialize)]
struct JsonReport<'a> {
    extensions: &'a SizeReport,
    total: ExtensionTotals,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.log);

    let config = CountConfig::new(&cli.directory)
        .with_extensions(&cli.extensions)
        .exclude_relative(&cli.exclude)
        .with_log_progress(cli.log);

    let aggregator = TreeAggregator::new(config).context("Invalid scan setup")?;
    let report = aggregator.aggregate().context("Scan failed")?;

    match (cli.print, cli.format) {
        (Some(selection), _) => println!("{}", render_selection(&report, selection)),
        (None, OutputFormat::Text) => print!("{}", render_table(&report)),
        (None, OutputFormat::Json) => {
            let json = JsonReport {
                extensions: &report,
                total: report.total(),
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

/// Send log lines to stderr; `--log` raises the default level to info.
fn init_logging(log: bool) {
    let default_level = if log { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(false)
        .init();
}

/// Convert bytes to kilobytes rounded to two decimals.
fn format_kilobytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}

/// Render the selected total as a bare value.
fn render_selection(report: &SizeReport, selection: Selection) -> String {
    let total = report.total();
    match selection {
        Selection::KbSize => format_kilobytes(total.bytes),
        Selection::Lines => total.lines.to_string(),
        Selection::Files => total.files.to_string(),
    }
}

const HEADERS: [&str; 4] = ["Extension", "Total files", "Total lines", "Total size (KB)"];

fn table_row(label: &str, totals: &ExtensionTotals) -> [String; 4] {
    [
        label.to_string(),
        totals.files.to_string(),
        totals.lines.to_string(),
        format_kilobytes(totals.bytes),
    ]
}

/// Render the report as a framed, right-aligned table sorted by extension.
///
/// A `TOTAL` row follows a divider when more than one extension is present.
fn render_table(report: &SizeReport) -> String {
    let rows: Vec<[String; 4]> = report
        .iter()
        .map(|(label, totals)| table_row(&display_label(label), totals))
        .collect();
    let total_row = (report.len() > 1).then(|| table_row("TOTAL", &report.total()));

    let mut widths = HEADERS.map(str::len);
    for row in rows.iter().chain(total_row.iter()) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let inner: usize = widths.iter().map(|w| w + 2).sum::<usize>() + widths.len() - 1;
    let rule = format!("+{}+\n", "-".repeat(inner));
    let line = |cells: &[String; 4]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {cell:>width$} "))
            .collect();
        format!("|{}|\n", padded.join(" "))
    };

    let mut out = String::new();
    out.push_str(&rule);
    out.push_str(&line(&HEADERS.map(String::from)));
    out.push_str(&rule);
    for row in &rows {
        out.push_str(&line(row));
    }
    if let Some(total_row) = &total_row {
        out.push_str(&rule);
        out.push_str(&line(total_row));
    }
    out.push_str(&rule);
    out
}
