// src/cli.rs
//
// Command line front end: `scrape` builds a corpus, `analyze` summarizes one.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::analysis::{self, report};
use crate::config::consts::{REQUEST_PAUSE_MS, TEXT_URL_TEMPLATE};
use crate::config::options::{AnalyzeOptions, ScrapeOptions, YearRule};
use crate::core::HttpFetcher;
use crate::error::Result;
use crate::progress::Progress;
use crate::scrape;

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Build and analyze a papyrus metadata corpus")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one page per identifier and write the corpus CSV
    Scrape {
        /// CSV with an ID column (or identifiers in the first column)
        input_ids: PathBuf,
        /// Corpus CSV to write; overwritten if present
        output: PathBuf,
        /// URL template, `{id}` is replaced by the catalog number
        #[arg(long, default_value = TEXT_URL_TEMPLATE)]
        base_url: String,
        /// Pause between requests in milliseconds, 0 to disable
        #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
        pause_ms: u64,
    },
    /// Clean a corpus CSV and print genre, reuse, city and year aggregates
    Analyze {
        input: PathBuf,
        /// Only count `AD` years written with four digits
        #[arg(long)]
        four_digit_years: bool,
        /// Also write genres.csv, cities.csv and years.csv here
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

impl Command {
    fn scrape_options(base_url: &str, pause_ms: u64) -> ScrapeOptions {
        ScrapeOptions {
            url_template: s!(base_url),
            pause: Duration::from_millis(pause_ms),
        }
    }
}

/// Prints one line per identifier to stdout.
#[derive(Default)]
pub struct CliProgress {
    done: usize,
    total: usize,
}

impl CliProgress {
    fn counter(&self) -> String {
        format!("[{}/{}]", self.done, self.total)
    }

    fn done_line(&mut self, id: &str) -> String {
        self.done += 1;
        format!("{} {id} ok", self.counter())
    }

    fn failed_line(&mut self, id: &str, msg: &str) -> String {
        self.done += 1;
        format!("{} {id} skipped: {msg}", self.counter())
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, id: &str) {
        println!("{}", self.done_line(id));
    }
    fn item_failed(&mut self, id: &str, msg: &str) {
        println!("{}", self.failed_line(id, msg));
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    match args.command {
        Command::Scrape { input_ids, output, base_url, pause_ms } => {
            let opts = Command::scrape_options(&base_url, pause_ms);
            let fetcher = HttpFetcher::new();
            let mut progress = CliProgress::default();
            let summary = scrape::build_from_file(&input_ids, &output, &fetcher, &opts, Some(&mut progress))?;

            println!(
                "Wrote {} of {} record(s) to {}",
                summary.written,
                summary.attempted,
                output.display()
            );
            if let Some(path) = &summary.failures_file {
                println!("{} failure(s) listed in {}", summary.failures.len(), path.display());
            }
        }
        Command::Analyze { input, four_digit_years, out_dir } => {
            let opts = AnalyzeOptions {
                year_rule: if four_digit_years { YearRule::FourDigit } else { YearRule::AnyDigits },
                out_dir,
            };
            let analysis = analysis::run(&input, &opts)?;
            print!("{}", report::render(&analysis));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn scrape_defaults() {
        let args = Args::try_parse_from(["cli", "scrape", "ids.csv", "out.csv"]).unwrap();
        let Command::Scrape { base_url, pause_ms, .. } = args.command else {
            panic!("expected scrape");
        };
        let opts = Command::scrape_options(&base_url, pause_ms);
        assert_eq!(opts, ScrapeOptions::default());
    }

    #[test]
    fn analyze_flags() {
        let args = Args::try_parse_from([
            "cli", "analyze", "corpus.csv", "--four-digit-years", "--out-dir", "tables",
        ])
        .unwrap();
        match args.command {
            Command::Analyze { input, four_digit_years, out_dir } => {
                assert_eq!(input, PathBuf::from("corpus.csv"));
                assert!(four_digit_years);
                assert_eq!(out_dir, Some(PathBuf::from("tables")));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn progress_lines_print_ids_as_stored() {
        let mut p = CliProgress::default();
        p.begin(2);
        assert_eq!(p.done_line("TM 1"), "[1/2] TM 1 ok");
        assert_eq!(p.failed_line("P.Oxy 5", "invalid identifier"), "[2/2] P.Oxy 5 skipped: invalid identifier");
    }

    #[test]
    fn scrape_requires_output() {
        assert!(Args::try_parse_from(["cli", "scrape", "ids.csv"]).is_err());
    }
}
