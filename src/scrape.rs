// src/scrape.rs
//
// Corpus builder: identifiers → URLs → page spec → CSV rows.
// Strictly sequential, one attempt per identifier. A failing identifier is
// logged, recorded in the failure report and skipped; the run goes on.

use std::fmt;
use std::path::{Path, PathBuf};
use std::thread;

use crate::{
    config::options::ScrapeOptions,
    core::{net::Fetch, sanitize::catalog_number},
    error::{Error, Result},
    file::{self, CorpusWriter, RecordSink},
    progress::Progress,
    record::Record,
    specs::text_page,
};

/// Where in the per-identifier pipeline something went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Resolve,
    Fetch,
    Write,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Resolve => "resolve",
            Stage::Fetch => "fetch",
            Stage::Write => "write",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub id: String,
    pub stage: Stage,
    pub message: String,
}

impl Failure {
    fn new(id: &str, stage: Stage, err: &Error) -> Self {
        Self { id: s!(id), stage, message: err.to_string() }
    }
}

#[derive(Debug, Default)]
pub struct BuildSummary {
    pub attempted: usize,
    pub written: usize,
    pub failures: Vec<Failure>,
    /// Set when a failure report was written.
    pub failures_file: Option<PathBuf>,
}

/// Resolve, fetch and extract one identifier.
pub fn scrape_one(fetcher: &dyn Fetch, opts: &ScrapeOptions, raw_id: &str) -> std::result::Result<Record, Failure> {
    let number = catalog_number(raw_id)
        .ok_or_else(|| Failure::new(raw_id, Stage::Resolve, &Error::InvalidId(s!(raw_id))))?;
    let url = opts.url_for(number);
    logd!("Scrape: GET {url}");
    let body = fetcher
        .fetch(&url)
        .map_err(|e| Failure::new(raw_id, Stage::Fetch, &e))?;
    Ok(text_page::extract(&body, number))
}

/// Scrape every identifier into `output`. Only failing to create the output
/// aborts the run; everything else is per-identifier.
pub fn build_corpus(
    ids: &[String],
    output: &Path,
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<BuildSummary> {
    let mut writer = CorpusWriter::create(output)?;
    let reborrow = progress.as_mut().map(|p| &mut **p as &mut dyn Progress);
    let mut summary = scrape_into(ids, &mut writer, fetcher, opts, reborrow);

    if !summary.failures.is_empty() {
        let path = file::failures_path(writer.path());
        let rows: Vec<Vec<&str>> = summary
            .failures
            .iter()
            .map(|f| vec![f.id.as_str(), f.stage.as_str(), f.message.as_str()])
            .collect();
        match file::write_table(&path, &["ID", "Stage", "Message"], &rows) {
            Ok(()) => summary.failures_file = Some(path),
            Err(e) => loge!("Scrape: could not write failure report {}: {e}", path.display()),
        }
    }

    logf!(
        "Scrape: done, {}/{} written, {} failed → {}",
        summary.written,
        summary.attempted,
        summary.failures.len(),
        output.display()
    );
    if let Some(p) = progress {
        p.finish();
    }

    Ok(summary)
}

/// The per-identifier loop over any record sink. A failed append is a
/// `Stage::Write` failure for that identifier, not the end of the run.
pub fn scrape_into(
    ids: &[String],
    sink: &mut dyn RecordSink,
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> BuildSummary {
    let mut summary = BuildSummary::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    for (i, raw_id) in ids.iter().enumerate() {
        if i > 0 && !opts.pause.is_zero() {
            thread::sleep(opts.pause); // be polite
        }
        summary.attempted += 1;

        let outcome = scrape_one(fetcher, opts, raw_id).and_then(|rec| {
            sink.append(&rec)
                .map_err(|e| Failure::new(raw_id, Stage::Write, &e))
                .map(|_| rec)
        });

        match outcome {
            Ok(rec) => {
                summary.written += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&rec.id);
                }
            }
            Err(failure) => {
                loge!("Scrape: {} failed at {}: {}", failure.id, failure.stage, failure.message);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&failure.id, &failure.message);
                }
                summary.failures.push(failure);
            }
        }
    }
    summary
}

/// `build_corpus` over the identifiers of an input CSV.
pub fn build_from_file(
    input: &Path,
    output: &Path,
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<BuildSummary> {
    let ids = file::read_ids(input)?;
    let msg = format!("{} identifier(s) from {}", ids.len(), input.display());
    logf!("Scrape: {msg}");
    if let Some(p) = progress.as_deref_mut() {
        p.log(&msg);
    }
    build_corpus(&ids, output, fetcher, opts, progress)
}
