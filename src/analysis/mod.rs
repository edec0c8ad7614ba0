//! Corpus analysis: cleaning, derived fields and descriptive aggregates.
//!
//! Everything here is a pure function of the loaded records. Charts are
//! rendered separately (`report`), so the numbers can be tested on their own.

pub mod report;

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{CITIES_FILE, GENRES_FILE, YEARS_FILE};
use crate::config::options::{AnalyzeOptions, YearRule};
use crate::core::sanitize::{is_missing, present};
use crate::data::Corpus;
use crate::error::Result;
use crate::file;
use crate::record::Record;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AD\s*[0-9]{1,4}(?:\s*-\s*AD\s*[0-9]{1,4})?").unwrap());
static YEAR_ANY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"AD\s*([0-9]{1,4})").unwrap());
static YEAR_FOUR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"AD\s*([0-9]{4})").unwrap());

const REUSED_MARKER: &str = "reused";

/* ---------- cleaning ---------- */

#[derive(Clone, Debug, Default)]
pub struct Cleaned {
    pub records: Vec<Record>,
    pub total: usize,
    pub missing_text: usize,
}

/// Drop records without a full text, then sort by identifier.
pub fn clean(records: Vec<Record>) -> Cleaned {
    let total = records.len();
    let mut kept: Vec<Record> = records.into_iter().filter(|r| !is_missing(&r.full_text)).collect();
    kept.sort_by(|a, b| a.id.cmp(&b.id));
    Cleaned { missing_text: total - kept.len(), total, records: kept }
}

/* ---------- derived fields ---------- */

/// First whitespace-delimited token of the classification label.
pub fn genre(content: &str) -> Option<&str> {
    present(content)?.split_whitespace().next()
}

pub fn is_reused(publications: &str) -> bool {
    publications.contains(REUSED_MARKER)
}

/// Place name before the first comma of the provenance.
pub fn city(provenance: &str) -> Option<&str> {
    present(provenance)?
        .split(',')
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// `"something AD 350 - AD 400 extra"` → `"AD 350 - AD 400"`.
pub fn normalize_date(date: &str) -> Option<&str> {
    DATE_RE.find(date).map(|m| m.as_str())
}

pub fn year(normalized: &str, rule: YearRule) -> Option<i32> {
    let re = match rule {
        YearRule::AnyDigits => &*YEAR_ANY,
        YearRule::FourDigit => &*YEAR_FOUR,
    };
    re.captures(normalized)?.get(1)?.as_str().parse().ok()
}

/// A record with its dating resolved; only records that have a year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dated<'a> {
    pub record: &'a Record,
    pub date: &'a str,
    pub year: i32,
}

pub fn dated(records: &[Record], rule: YearRule) -> Vec<Dated<'_>> {
    records
        .iter()
        .filter_map(|record| {
            let date = normalize_date(&record.date)?;
            let year = year(date, rule)?;
            Some(Dated { record, date, year })
        })
        .collect()
}

/* ---------- aggregates ---------- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Analysis {
    pub total: usize,
    pub missing_text: usize,
    pub kept: usize,
    /// Descending by count, ties by name.
    pub genres: Vec<(String, usize)>,
    pub reused: usize,
    pub cities: Vec<(String, usize)>,
    /// Records whose date normalized.
    pub dated: usize,
    /// One bin per year from the earliest to the latest observed year.
    pub years: Vec<(i32, usize)>,
}

impl Analysis {
    pub fn genre_share(&self, count: usize) -> f64 {
        let n: usize = self.genres.iter().map(|(_, c)| c).sum();
        if n == 0 { 0.0 } else { count as f64 / n as f64 }
    }

    pub fn year_count(&self) -> usize {
        self.years.iter().map(|(_, c)| c).sum()
    }
}

pub fn count_desc<'a, I: IntoIterator<Item = &'a str>>(items: I) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for it in items {
        *counts.entry(it).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts.into_iter().map(|(k, v)| (s!(k), v)).collect();
    out.sort_by(|a, b| (Reverse(a.1), &a.0).cmp(&(Reverse(b.1), &b.0)));
    out
}

pub fn year_histogram<I: IntoIterator<Item = i32>>(years: I) -> Vec<(i32, usize)> {
    let mut bins: BTreeMap<i32, usize> = BTreeMap::new();
    for y in years {
        *bins.entry(y).or_default() += 1;
    }
    let (Some(&lo), Some(&hi)) = (bins.keys().next(), bins.keys().next_back()) else {
        return Vec::new();
    };
    (lo..=hi).map(|y| (y, bins.get(&y).copied().unwrap_or(0))).collect()
}

pub fn analyze(records: Vec<Record>, opts: &AnalyzeOptions) -> Analysis {
    let cleaned = clean(records);
    let recs = &cleaned.records;

    let normalized = recs.iter().filter(|r| normalize_date(&r.date).is_some()).count();
    let with_year = dated(recs, opts.year_rule);

    Analysis {
        total: cleaned.total,
        missing_text: cleaned.missing_text,
        kept: recs.len(),
        genres: count_desc(recs.iter().filter_map(|r| genre(&r.content))),
        reused: recs.iter().filter(|r| is_reused(&r.publications)).count(),
        cities: count_desc(recs.iter().filter_map(|r| city(&r.provenance))),
        dated: normalized,
        years: year_histogram(with_year.iter().map(|d| d.year)),
    }
}

/// Load, analyze, and optionally write the aggregate tables.
pub fn run(input: &Path, opts: &AnalyzeOptions) -> Result<Analysis> {
    let corpus = Corpus::load(input)?;
    let analysis = analyze(corpus.records().to_vec(), opts);
    logf!(
        "Analyze: {} kept of {} ({} without text), {} with a year",
        analysis.kept,
        analysis.total,
        analysis.missing_text,
        analysis.year_count()
    );
    if let Some(dir) = &opts.out_dir {
        write_tables(&analysis, dir)?;
    }
    Ok(analysis)
}

pub fn write_tables(a: &Analysis, dir: &Path) -> Result<()> {
    file::ensure_directory(dir)?;

    let genres: Vec<Vec<String>> = a
        .genres
        .iter()
        .map(|(g, c)| vec![g.clone(), c.to_string(), format!("{:.4}", a.genre_share(*c))])
        .collect();
    file::write_table(&dir.join(GENRES_FILE), &["Genre", "Count", "Share"], &genres)?;

    let cities: Vec<Vec<String>> = a.cities.iter().map(|(k, c)| vec![k.clone(), c.to_string()]).collect();
    file::write_table(&dir.join(CITIES_FILE), &["City", "Count"], &cities)?;

    let years: Vec<Vec<String>> = a.years.iter().map(|(y, c)| vec![y.to_string(), c.to_string()]).collect();
    file::write_table(&dir.join(YEARS_FILE), &["Year", "Count"], &years)?;

    logf!("Analyze: tables written to {}", dir.display());
    Ok(())
}
