// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// URL template; `{id}` is replaced by the bare catalog number.
    pub url_template: String,
    /// Fixed pause between two requests. Zero disables it.
    pub pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url_template: s!(TEXT_URL_TEMPLATE),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl ScrapeOptions {
    pub fn url_for(&self, number: &str) -> String {
        self.url_template.replace("{id}", number)
    }
}

/// Which `AD <digits>` capture counts as a usable year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum YearRule {
    /// First `AD` followed by 1 to 4 digits.
    #[default]
    AnyDigits,
    /// Only `AD` followed by exactly 4 digits.
    FourDigit,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub year_rule: YearRule,
    /// Where to write the aggregate tables, if anywhere.
    pub out_dir: Option<PathBuf>,
}
