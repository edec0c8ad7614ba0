// src/explore/search.rs
use crate::config::consts::EXCERPT_CHARS;
use crate::core::sanitize::is_missing;
use crate::data::Corpus;
use crate::record::Record;

use super::annotate::{excerpt, query_matcher};

#[derive(Clone, Debug)]
pub struct Hit<'a> {
    pub record: &'a Record,
    pub excerpt: String,
}

/// Case-insensitive literal search over full texts of the whole corpus.
/// Filters do not apply; an empty query yields nothing.
pub fn search<'a>(corpus: &'a Corpus, query: &str) -> Vec<Hit<'a>> {
    let Some(matcher) = query_matcher(query) else {
        return Vec::new();
    };
    corpus
        .records()
        .iter()
        .filter(|r| !is_missing(&r.full_text) && matcher.is_match(&r.full_text))
        .map(|record| Hit {
            record,
            excerpt: excerpt(&record.full_text, &matcher, EXCERPT_CHARS),
        })
        .collect()
}
