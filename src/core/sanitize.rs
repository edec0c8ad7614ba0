// src/core/sanitize.rs
use crate::config::consts::{ID_PREFIX, MISSING_SPELLINGS, PLACEHOLDER};

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Empty cells and the usual "not a value" spellings count as missing.
pub fn is_missing(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || MISSING_SPELLINGS.contains(&t)
}

/// `Some(value)` unless the cell is missing.
pub fn present(s: &str) -> Option<&str> {
    if is_missing(s) { None } else { Some(s) }
}

pub fn or_placeholder(v: Option<String>) -> String {
    v.unwrap_or_else(|| s!(PLACEHOLDER))
}

/// "TM 12345", "TM12345", " 12345 " → "12345". Anything non-numeric is rejected.
pub fn catalog_number(raw: &str) -> Option<&str> {
    let t = raw.trim();
    let t = t.strip_prefix(ID_PREFIX).unwrap_or(t).trim();
    if !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()) {
        Some(t)
    } else {
        None
    }
}

/// Truncate to at most `max` characters (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
