// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::{
    config::{
        consts::{DATA_FILE, FIRST_DATA_COLUMN, NAME_ENDPOINT, NAME_TIMEOUT_SECS},
        options::{AppOptions, ColumnLayout, NameSource, OutputFormat},
    },
    error::Result,
    progress::LogProgress,
    runner::{RefreshOutcome, Session},
    table::{summary_json, TableData},
};

/// Summarize a scouting sheet per team and print it.
#[derive(Parser, Debug, Clone)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Scouting CSV (first line is the form header)
    #[arg(short, long, default_value = DATA_FILE)]
    pub file: PathBuf,

    /// 0-based column holding the match number; the other fields follow it
    #[arg(long, default_value_t = FIRST_DATA_COLUMN)]
    pub first_column: u16,

    /// Skip team name lookups
    #[arg(long)]
    pub offline: bool,

    /// GraphQL endpoint for team names
    #[arg(long, default_value = NAME_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout for name lookups, in seconds
    #[arg(long, default_value_t = NAME_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Emit a header line (csv/tsv)
    #[arg(long)]
    pub headers: bool,

    /// Decimal places for averages (table format)
    #[arg(long, default_value_t = 2)]
    pub decimals: usize,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let names = if self.offline {
            NameSource::Offline
        } else {
            NameSource::Remote {
                endpoint: self.endpoint.clone(),
                timeout: Duration::from_secs(self.timeout),
            }
        };
        AppOptions {
            data_path: self.file.clone(),
            layout: ColumnLayout::starting_at(self.first_column),
            names,
        }
    }
}

pub fn run(args: &Args) -> Result<()> {
    logf!("CLI: file={} format={:?}", args.file.display(), args.format);
    let mut session = Session::from_options(args.options());
    let mut progress = LogProgress::default();

    // A fresh session always recomputes
    let summary = match session.refresh(Some(&mut progress))? {
        RefreshOutcome::Updated(s) => s,
        RefreshOutcome::UpToDate => return Ok(()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => {
            TableData::from_summary(&summary, Some(args.decimals)).write_text(&mut out)?
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delim = args.format.delim().unwrap_or(b',');
            TableData::from_summary(&summary, None).write_delimited(&mut out, delim, args.headers)?
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &summary_json(&summary))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
