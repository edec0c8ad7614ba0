// src/csv.rs
//
// Thin layer over the `csv` crate: whole-table reads (quotes, CRLF and BOM
// tolerant, ragged rows allowed) and row writes.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// A header row plus string rows, as read from disk.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Index of the first header equal to `name` (ASCII case-insensitive).
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

pub fn read_table(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;
    parse_table(file)
}

pub fn parse_table<R: Read>(input: R) -> Result<Table> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        // skip fully blank lines
        if rec.iter().all(|c| c.is_empty()) { continue; }
        rows.push(rec.iter().map(str::to_string).collect());
    }
    Ok(Table { headers, rows })
}

/// Write a single row and flush so the line is on disk before returning.
pub fn write_row<W: Write, S: AsRef<[u8]>>(w: &mut ::csv::Writer<W>, row: &[S]) -> Result<()> {
    w.write_record(row)?;
    w.flush().map_err(::csv::Error::from)?;
    Ok(())
}
