// src/table.rs
//! TableData: the summary flattened into display rows.
//!
//! Both front ends render from this: the GUI table draws `rows` and colors
//! each row by `highlight`; the CLI prints the same cells as text, CSV/TSV,
//! or JSON.

use std::io::Write;

use serde_json::{json, Value};

use crate::data::Stat;
use crate::engine::Summary;
use crate::error::Result;

pub const TEAM_HEADERS: [&str; 3] = ["Team Number", "Team Name", "Match Numbers"];

/// Columns holding text rather than numbers (left-aligned).
pub const NON_NUMERIC_COLUMNS: [usize; 2] = [1, 2];

/// Preferred widths, in the order of `headers()`.
pub const COLUMN_WIDTHS: [f32; 9] = [100.0, 150.0, 200.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0];

pub fn headers() -> Vec<String> {
    TEAM_HEADERS
        .iter()
        .map(|h| s!(*h))
        .chain(Stat::ALL.iter().map(|s| s!(s.label())))
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub team: u32,
    pub cells: Vec<String>,
    pub highlight: Option<Stat>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl TableData {
    pub fn empty() -> Self {
        Self { headers: headers(), rows: Vec::new() }
    }

    /// Flatten a summary. `decimals: None` prints averages at full precision.
    pub fn from_summary(summary: &Summary, decimals: Option<usize>) -> Self {
        let rows = summary
            .teams
            .iter()
            .map(|t| {
                let mut cells = vec![t.team.to_string(), t.name.clone(), t.matches.join(", ")];
                cells.extend(Stat::ALL.iter().map(|&s| fmt_mean(t.mean(s), decimals)));
                TableRow { team: t.team, cells, highlight: summary.highlight_for(t.team) }
            })
            .collect();
        Self { headers: headers(), rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.cells.clone()).collect()
    }

    /// Fixed-width text table, leader rows marked with `*` and the stat led.
    pub fn write_text<W: Write>(&self, mut out: W) -> Result<()> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for r in &self.rows {
            for (w, c) in widths.iter_mut().zip(&r.cells) {
                *w = (*w).max(c.chars().count());
            }
        }

        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(ci, (c, &w))| {
                    if NON_NUMERIC_COLUMNS.contains(&ci) {
                        format!("{c:<w$}")
                    } else {
                        format!("{c:>w$}")
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        };

        writeln!(out, "{}", line(&self.headers[..]).trim_end())?;
        for r in &self.rows {
            let mut text = line(&r.cells[..]);
            if let Some(stat) = r.highlight {
                text.push_str("  * ");
                text.push_str(stat.leader_label());
            }
            writeln!(out, "{}", text.trim_end())?;
        }
        Ok(())
    }

    /// CSV/TSV via the csv writer.
    pub fn write_delimited<W: Write>(&self, out: W, delim: u8, include_headers: bool) -> Result<()> {
        let headers = include_headers.then_some(self.headers.as_slice());
        crate::csv::write_rows(out, headers, &self.cell_rows(), delim)
    }
}

fn fmt_mean(v: f64, decimals: Option<usize>) -> String {
    match decimals {
        Some(d) => format!("{v:.d$}"),
        None => v.to_string(),
    }
}

/// JSON report: one object per team with raw (unrounded) averages,
/// plus the leader of each highlighted stat.
pub fn summary_json(summary: &Summary) -> Value {
    let teams: Vec<Value> = summary
        .teams
        .iter()
        .map(|t| {
            let mut obj = serde_json::Map::new();
            obj.insert(s!("team"), json!(t.team));
            obj.insert(s!("name"), json!(t.name));
            obj.insert(s!("matches"), json!(t.matches));
            for s in Stat::ALL {
                obj.insert(s!(s.key()), json!(t.mean(s)));
            }
            let leads: Vec<&str> = summary.leaders_of(t.team).iter().map(|s| s.key()).collect();
            obj.insert(s!("leads"), json!(leads));
            Value::Object(obj)
        })
        .collect();

    let mut leaders = serde_json::Map::new();
    for s in Stat::LEADERS {
        let v = summary
            .best(s)
            .map(|l| json!({ "team": l.team, "mean": l.mean }))
            .unwrap_or(Value::Null);
        leaders.insert(s!(s.key()), v);
    }

    json!({ "teams": teams, "leaders": leaders })
}
