// src/explore/stats.rs
//
// Irregularity statistics for the dashboard's statistics tab.

use crate::analysis::count_desc;
use crate::data::Corpus;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IrregularityStats {
    /// (record id, number of irregularities), in corpus order
    pub per_record: Vec<(String, usize)>,
    /// each distinct irregularity string with its corpus-wide count, descending
    pub frequencies: Vec<(String, usize)>,
}

impl IrregularityStats {
    pub fn compute(corpus: &Corpus) -> Self {
        let records = corpus.records();
        let per_record = records
            .iter()
            .map(|r| (r.id.clone(), r.irregularities.len()))
            .collect();
        let frequencies = count_desc(
            records
                .iter()
                .flat_map(|r| r.irregularities.iter().map(String::as_str)),
        );
        Self { per_record, frequencies }
    }

    pub fn total(&self) -> usize {
        self.per_record.iter().map(|(_, n)| n).sum()
    }
}
