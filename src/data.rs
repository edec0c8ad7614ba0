// src/data.rs
//
// The in-memory corpus. Loaded once per session from a CSV file and never
// written back; every view (analysis, explorer) reads it immutably.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::csv::{self, Table};
use crate::error::Result;
use crate::record::{Column, ColumnMap, Record};

#[derive(Clone, Debug, Default)]
pub struct Corpus {
    records: Vec<Record>,
}

impl Corpus {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let table = csv::read_table(path)?;
        let corpus = Self::from_table(&table)?;
        logf!("Corpus: loaded {} record(s) from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    pub fn from_reader<R: Read>(input: R) -> Result<Self> {
        Self::from_table(&csv::parse_table(input)?)
    }

    /// Decode every row. Identifiers are unique: a repeated id keeps the first row.
    pub fn from_table(table: &Table) -> Result<Self> {
        let map = ColumnMap::new(&table.headers);
        map.require(Column::Id)?;

        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(table.row_count());
        for row in &table.rows {
            let rec = map.record(row)?;
            if !seen.insert(rec.id.clone()) {
                logw!("Corpus: duplicate id {}, keeping first", rec.id);
                continue;
            }
            records.push(rec);
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, ix: usize) -> Option<&Record> {
        self.records.get(ix)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn duplicates_keep_first() {
        let text = "ID,Full Text\nTM 1,a\nTM 2,b\nTM 1,c\n";
        let c = Corpus::from_reader(text.as_bytes()).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.records()[0].full_text, "a");
        assert_eq!(c.position("TM 2"), Some(1));
    }

    #[test]
    fn id_column_is_required() {
        let err = Corpus::from_reader("Name,Full Text\nx,y\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn("ID")));
    }
}
