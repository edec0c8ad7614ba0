// src/file.rs

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use crate::config::consts::FAILURES_SUFFIX;
use crate::csv::{read_table, write_row};
use crate::error::{Error, Result};
use crate::record::{self, Record};

/// Identifiers from the `ID` column (any case), or from the first column
/// when there is none. Blank cells are skipped.
pub fn read_ids(path: &Path) -> Result<Vec<String>> {
    let table = read_table(path)?;
    let col = table.column("ID").unwrap_or(0);
    Ok(table
        .rows
        .iter()
        .filter_map(|r| r.get(col))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}

/// Incremental corpus output. The file is created (truncated) with its header
/// on open, and every appended row is flushed, so a crash keeps what was done.
pub struct CorpusWriter {
    path: PathBuf,
    out: ::csv::Writer<File>,
}

impl CorpusWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let out = start_file(path, &record::headers())?;
        Ok(Self { path: path.to_path_buf(), out })
    }

    pub fn append(&mut self, rec: &Record) -> Result<()> {
        write_row(&mut self.out, &record::to_row(rec)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Where the builder puts each record as soon as it is extracted.
pub trait RecordSink {
    fn append(&mut self, rec: &Record) -> Result<()>;
}

impl RecordSink for CorpusWriter {
    fn append(&mut self, rec: &Record) -> Result<()> {
        CorpusWriter::append(self, rec)
    }
}

/// Write a complete small table in one go.
pub fn write_table<S: AsRef<str>>(path: &Path, headers: &[&str], rows: &[Vec<S>]) -> Result<()> {
    let mut out = start_file(path, headers)?;
    for row in rows {
        let cells: Vec<&str> = row.iter().map(|c| c.as_ref()).collect();
        out.write_record(&cells)?;
    }
    out.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Ensure parent dir exists; create/truncate file; write header.
fn start_file<S: AsRef<[u8]>>(path: &Path, headers: &[S]) -> Result<::csv::Writer<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = ::csv::Writer::from_writer(file);
    write_row(&mut out, headers)?;
    Ok(out)
}

/// `out/corpus.csv` → `out/corpus.failures.csv`
pub fn failures_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| s!("corpus"));
    output.with_file_name(join!(&stem, ".", FAILURES_SUFFIX, ".csv"))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let msg = format!("path exists but is not a directory: {}", dir.display());
        return Err(Error::io(dir, std::io::Error::other(msg)));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}
