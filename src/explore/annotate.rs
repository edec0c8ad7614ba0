// src/explore/annotate.rs
//
// Inline text markup for the explorer: correction splicing, search
// highlighting, and a small parser turning the markup back into styled spans.
//
// Markup is deliberately tiny: `~~struck~~` and `**strong**`.

use regex::{NoExpand, Regex, RegexBuilder};

use crate::core::sanitize::truncate_chars;
use crate::record::{Irregularity, Record};

const STRONG: &str = "**";
const STRIKE: &str = "~~";

/// Replace whole-word occurrences of each original reading with
/// `~~original~~ **correction**`, pair by pair. Later pairs run over the
/// output of earlier ones.
pub fn splice<'a, I>(text: &str, pairs: I) -> String
where
    I: IntoIterator<Item = Irregularity<'a>>,
{
    let mut out = s!(text);
    for irr in pairs {
        let pattern = format!(r"\b{}\b", regex::escape(irr.original));
        let Ok(re) = Regex::new(&pattern) else {
            logw!("Annotate: unusable reading {:?}", irr.original);
            continue;
        };
        let marker = format!("{STRIKE}{}{STRIKE} {STRONG}{}{STRONG}", irr.original, irr.correction);
        out = re.replace_all(&out, NoExpand(&marker)).into_owned();
    }
    out
}

/// The record's full text with its corrections spliced in.
pub fn annotate(rec: &Record) -> String {
    splice(&rec.full_text, rec.irregularity_pairs())
}

/// Case-insensitive literal matcher for a search query.
pub fn query_matcher(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Wrap every match in `**…**`, keeping the text's own casing.
pub fn highlight(text: &str, matcher: &Regex) -> String {
    matcher
        .replace_all(text, |caps: &regex::Captures<'_>| join!(STRONG, &caps[0], STRONG))
        .into_owned()
}

/// Highlighted text cut to `budget` characters, always followed by "...".
pub fn excerpt(text: &str, matcher: &Regex, budget: usize) -> String {
    let marked = highlight(text, matcher);
    join!(truncate_chars(&marked, budget), "...")
}

/* ---------------- Markup → spans ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
    pub strike: bool,
}

/// Split markup into styled runs. An opening marker with no closing partner
/// later in the text is kept as literal text.
pub fn spans(markup: &str) -> Vec<Span> {
    let mut out: Vec<Span> = Vec::new();
    let mut cur = s!();
    let (mut strong, mut strike) = (false, false);
    let mut i = 0usize;

    let flush = |out: &mut Vec<Span>, cur: &mut String, strong: bool, strike: bool| {
        if !cur.is_empty() {
            out.push(Span { text: std::mem::take(cur), strong, strike });
        }
    };

    while i < markup.len() {
        let rest = &markup[i..];
        let marker = [STRONG, STRIKE].into_iter().find(|m| rest.starts_with(m));
        if let Some(m) = marker {
            let active = if m == STRONG { strong } else { strike };
            let closes_later = markup[i + m.len()..].contains(m);
            if active || closes_later {
                flush(&mut out, &mut cur, strong, strike);
                if m == STRONG { strong = !strong } else { strike = !strike }
                i += m.len();
                continue;
            }
        }
        // advance one char
        let ch = rest.chars().next().unwrap_or_default();
        cur.push(ch);
        i += ch.len_utf8().max(1);
    }
    flush(&mut out, &mut cur, strong, strike);
    out
}
