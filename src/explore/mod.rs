// src/explore/mod.rs
//
// Pure view logic for the explorer dashboard.
//
// The GUI keeps a `Filters` value as its only session state and calls
// `ExplorerView::compute` on every frame. Nothing in here touches egui.

pub mod annotate;
pub mod search;
pub mod stats;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::present;
use crate::data::Corpus;
use crate::record::Record;

pub use search::Hit;
pub use stats::IrregularityStats;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{3,4}").unwrap());

/// A cross-reference request raised from the detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    Person(String),
    Place(String),
}

impl Lookup {
    pub fn name(&self) -> &str {
        match self {
            Lookup::Person(n) | Lookup::Place(n) => n,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Lookup::Person(_) => "person",
            Lookup::Place(_) => "place",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    /// `None` shows every provenance
    pub provenance: Option<String>,
    /// Inclusive; `None` means the full extent of the corpus
    pub years: Option<(i32, i32)>,
    pub selected: Option<String>,
    pub query: String,
    pub lookup: Option<Lookup>,
}

impl Filters {
    /// Select a record; any open lookup belongs to the previous one.
    pub fn select(&mut self, id: &str) {
        if self.selected.as_deref() != Some(id) {
            self.selected = Some(s!(id));
            self.lookup = None;
        }
    }
}

/// First run of three or four digits in a date string.
pub fn parsed_year(date: &str) -> Option<i32> {
    YEAR_RE.find(date).and_then(|m| m.as_str().parse().ok())
}

/// Sorted unique provenances, ignoring missing ones.
pub fn provenance_options(corpus: &Corpus) -> Vec<&str> {
    corpus
        .records()
        .iter()
        .filter_map(|r| present(&r.provenance))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Smallest and largest parsed year in the corpus.
pub fn year_bounds(corpus: &Corpus) -> Option<(i32, i32)> {
    bounds(corpus.records().iter().filter_map(|r| parsed_year(&r.date)))
}

fn bounds<I: IntoIterator<Item = i32>>(years: I) -> Option<(i32, i32)> {
    years.into_iter().fold(None, |acc, y| match acc {
        None => Some((y, y)),
        Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
    })
}

/// Ids of every record whose people (or places) list has an entry containing the name.
pub fn related_ids(corpus: &Corpus, lookup: &Lookup) -> Vec<String> {
    let name = lookup.name();
    corpus
        .records()
        .iter()
        .filter(|r| match lookup {
            Lookup::Person(_) => r.people.iter().any(|p| p.contains(name)),
            Lookup::Place(_) => r.place_names().any(|p| p.contains(name)),
        })
        .map(|r| r.id.clone())
        .collect()
}

#[derive(Clone, Debug)]
pub struct Detail<'a> {
    pub record: &'a Record,
    /// Full text with corrections spliced in as markup
    pub annotated: String,
}

#[derive(Clone, Debug)]
pub struct Related {
    pub lookup: Lookup,
    pub ids: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ExplorerView<'a> {
    pub provenances: Vec<&'a str>,
    /// Smallest and largest parsed year in the corpus
    pub year_bounds: Option<(i32, i32)>,
    /// The active range, clamped to the bounds
    pub years: Option<(i32, i32)>,
    /// Indices into the corpus, in corpus order
    pub visible: Vec<usize>,
    pub detail: Option<Detail<'a>>,
    pub related: Option<Related>,
    pub hits: Vec<Hit<'a>>,
}

impl<'a> ExplorerView<'a> {
    pub fn compute(corpus: &'a Corpus, f: &Filters) -> Self {
        let records = corpus.records();

        let provenances = provenance_options(corpus);

        let parsed: Vec<Option<i32>> = records.iter().map(|r| parsed_year(&r.date)).collect();
        let year_bounds = bounds(parsed.iter().flatten().copied());
        let years = year_bounds.map(|(lo, hi)| match f.years {
            Some((a, b)) => {
                let (a, b) = (a.clamp(lo, hi), b.clamp(lo, hi));
                (a.min(b), a.max(b))
            }
            None => (lo, hi),
        });

        let visible: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| f.provenance.as_deref().is_none_or(|p| r.provenance == p))
            .filter(|(ix, _)| match years {
                Some((lo, hi)) => parsed[*ix].is_some_and(|y| (lo..=hi).contains(&y)),
                None => true,
            })
            .map(|(ix, _)| ix)
            .collect();

        let selected_ix = f
            .selected
            .as_deref()
            .and_then(|id| visible.iter().copied().find(|&ix| records[ix].id == id))
            .or_else(|| visible.first().copied());

        let detail = selected_ix.map(|ix| {
            let record = &records[ix];
            Detail { record, annotated: annotate::annotate(record) }
        });

        let related = f.lookup.as_ref().map(|lookup| Related {
            lookup: lookup.clone(),
            ids: related_ids(corpus, lookup),
        });

        Self {
            provenances,
            year_bounds,
            years,
            visible,
            detail,
            related,
            hits: search::search(corpus, &f.query),
        }
    }

    pub fn selected_id(&self) -> Option<&'a str> {
        self.detail.as_ref().map(|d| d.record.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Place;

    fn rec(id: &str, date: &str, prov: &str) -> Record {
        Record {
            id: s!(id),
            date: s!(date),
            provenance: s!(prov),
            full_text: s!("nan"),
            ..Record::default()
        }
    }

    fn corpus() -> Corpus {
        let mut a = rec("1", "AD 300 - AD 350", "Oxyrhynchos");
        a.people = vec![s!("Aurelios Apion"), s!("Tiberios")];
        a.places = vec![Place { name: s!("Oxyrhynchos"), geo_id: s!("1524") }];
        a.full_text = s!("παρα τον παραδεισον");
        a.irregularities = vec![s!("παρα: read παρά")];
        let mut b = rec("2", "AD 520", "Hermopolis");
        b.people = vec![s!("Apion")];
        let c = rec("3", "unknown", "Oxyrhynchos");
        let d = rec("4", "BC 99", "nan");
        Corpus::new(vec![a, b, c, d])
    }

    #[test]
    fn year_is_first_three_or_four_digits() {
        assert_eq!(parsed_year("AD 300 - AD 350"), Some(300));
        assert_eq!(parsed_year("ca. 1250"), Some(1250));
        assert_eq!(parsed_year("AD 99"), None);
        assert_eq!(parsed_year(""), None);
    }

    #[test]
    fn defaults_show_every_dated_record() {
        let c = corpus();
        let v = ExplorerView::compute(&c, &Filters::default());
        assert_eq!(v.provenances, ["Hermopolis", "Oxyrhynchos"]);
        assert_eq!(v.year_bounds, Some((300, 520)));
        assert_eq!(v.visible, [0, 1]);
        assert_eq!(v.selected_id(), Some("1"));
        assert!(v.related.is_none());
        assert!(v.hits.is_empty());
    }

    #[test]
    fn provenance_and_range_combine() {
        let c = corpus();
        let f = Filters {
            provenance: Some(s!("Hermopolis")),
            years: Some((400, 9999)),
            ..Filters::default()
        };
        let v = ExplorerView::compute(&c, &f);
        assert_eq!(v.years, Some((400, 520)));
        assert_eq!(v.visible, [1]);
        assert_eq!(v.selected_id(), Some("2"));

        let f = Filters { provenance: Some(s!("Hermopolis")), years: Some((300, 310)), ..f };
        let v = ExplorerView::compute(&c, &f);
        assert!(v.visible.is_empty());
        assert!(v.detail.is_none());
    }

    #[test]
    fn no_years_means_no_date_filter() {
        let c = Corpus::new(vec![rec("1", "unknown", "A"), rec("2", "", "B")]);
        let v = ExplorerView::compute(&c, &Filters::default());
        assert_eq!(v.year_bounds, None);
        assert_eq!(v.visible, [0, 1]);
    }

    #[test]
    fn hidden_selection_falls_back_to_first_visible() {
        let c = corpus();
        let mut f = Filters::default();
        f.select("3");
        let v = ExplorerView::compute(&c, &f);
        assert_eq!(v.selected_id(), Some("1"));
        f.select("2");
        assert_eq!(ExplorerView::compute(&c, &f).selected_id(), Some("2"));
    }

    #[test]
    fn detail_carries_spliced_text() {
        let c = corpus();
        let v = ExplorerView::compute(&c, &Filters::default());
        let d = v.detail.unwrap();
        assert_eq!(d.annotated, "~~παρα~~ **παρά** τον παραδεισον");
    }

    #[test]
    fn lookup_matches_by_containment() {
        let c = corpus();
        let mut f = Filters::default();
        f.select("1");
        f.lookup = Some(Lookup::Person(s!("Apion")));
        let v = ExplorerView::compute(&c, &f);
        let rel = v.related.unwrap();
        assert_eq!(rel.ids, ["1", "2"]);

        assert_eq!(related_ids(&c, &Lookup::Place(s!("Oxy"))), ["1"]);

        // a new selection drops the lookup
        f.select("2");
        assert!(f.lookup.is_none());
    }
}
