// src/csv.rs
use std::io::{Read, Write};

use ::csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{Result, ScoutError};

/* ---------------- Reading ---------------- */

/// One data line of the scouting sheet, fields untouched.
#[derive(Clone, Debug)]
pub struct RawRow {
    /// 1-based line in the source file (for error messages)
    pub line: u64,
    pub record: StringRecord,
}

impl RawRow {
    pub fn from_fields<I, S>(line: u64, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = StringRecord::new();
        for f in fields {
            record.push_field(f.as_ref());
        }
        Self { line, record }
    }

    /// Field at `ix`, or a `MalformedRow` naming the line.
    pub fn field(&self, ix: usize) -> Result<&str> {
        self.record.get(ix).ok_or_else(|| ScoutError::MalformedRow {
            line: self.line,
            reason: format!("missing column {} (row has {})", ix + 1, self.record.len()),
        })
    }

    /// Number of fields in the row.
    pub fn width(&self) -> usize {
        self.record.len()
    }
}

/// Read every data row. The first line is the form's header and is dropped.
/// Rows may have any width; checking for needed columns is the grouper's job.
pub fn read_rows<R: Read>(mut reader: R) -> Result<Vec<RawRow>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(::csv::Error::from)?;
    read_rows_from_bytes(&bytes)
}

pub fn read_rows_from_bytes(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut lines = LineIndex::new(bytes);
    let mut rows = Vec::new();
    for rec in rdr.records() {
        let record = rec?;
        let offset = record.position().map(|p| p.byte()).unwrap_or(0);
        let line = lines.line_at(offset as usize);
        rows.push(RawRow { line, record });
    }
    Ok(rows)
}

/// Byte offset → 1-based physical line.
///
/// The reader's own line counter skips blank lines, and a record's start
/// offset can sit before the blank lines it skipped, so both are walked here.
/// Offsets must be queried in increasing order.
struct LineIndex<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: u64,
}

impl<'a> LineIndex<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0, line: 1 }
    }

    fn line_at(&mut self, offset: usize) -> u64 {
        let mut at = offset.clamp(self.pos, self.bytes.len());
        while at < self.bytes.len() && matches!(self.bytes[at], b'\n' | b'\r') {
            at += 1;
        }
        self.line += self.bytes[self.pos..at].iter().filter(|&&b| b == b'\n').count() as u64;
        self.pos = at;
        self.line
    }
}

/* ---------------- Writing ---------------- */

/// Write headers (optional) + rows as CSV/TSV. Quoting is handled by the writer.
pub fn write_rows<W: Write>(
    out: W,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    delim: u8,
) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .from_writer(out);

    if let Some(h) = headers {
        wtr.write_record(h)?;
    }
    for r in rows {
        wtr.write_record(r)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_dropped_and_lines_tracked() {
        let text = "a,b\n1,2\n\n3,4,5\n";
        let rows = read_rows(text.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].line, 4);
        assert_eq!(rows[1].width(), 3);
    }

    #[test]
    fn crlf_and_runs_of_blank_lines() {
        let text = "a,b\r\n\r\n1,2\r\n\r\n\r\n3,4\r\n";
        let rows = read_rows(text.as_bytes()).unwrap();
        let lines: Vec<u64> = rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![3, 6]);
    }

    #[test]
    fn quoted_newline_counts_toward_later_lines() {
        let text = "a,b\n\"x\ny\",1\n\n2,3\n";
        let rows = read_rows(text.as_bytes()).unwrap();
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].line, 5);
    }

    #[test]
    fn missing_field_is_malformed() {
        let row = RawRow::from_fields(7, ["x", "y"]);
        match row.field(5) {
            Err(ScoutError::MalformedRow { line, .. }) => assert_eq!(line, 7),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn tsv_quotes_only_when_needed() {
        let mut buf = Vec::new();
        let rows = vec![vec![s!("1"), s!("a, b")], vec![s!("2"), s!("tab\there")]];
        write_rows(&mut buf, None, &rows, b'\t').unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "1\ta, b\n2\t\"tab\there\"\n");
    }
}
