//! Spec for a catalog *text* page (`/text/<number>`).
//!
//! Every field has its own independent lookup. Missing markup never fails the
//! whole record; it only leaves that field at the placeholder (scalars) or
//! empty (lists).

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::config::consts::{ID_PREFIX, PLACE_URL_PREFIX};
use crate::core::html::{
    find_labeled, next_sibling_tag, next_sibling_text, sel, stripped_text, text_nodes_containing,
    text_of, texts,
};
use crate::core::sanitize::{normalize_ws, or_placeholder};
use crate::record::{IRREGULARITY_SEP, Record};

static SPAN: LazyLock<Selector> = LazyLock::new(|| sel("span"));
static FIRST_LINK: LazyLock<Selector> = LazyLock::new(|| sel("a"));
static DIVISION: LazyLock<Selector> = LazyLock::new(|| sel("div.division"));
static PUBLICATIONS: LazyLock<Selector> = LazyLock::new(|| sel("#text-publs p"));
static COLLECTIONS: LazyLock<Selector> = LazyLock::new(|| sel("#text-coll p"));
static ARCHIVE: LazyLock<Selector> = LazyLock::new(|| sel("div#text-arch"));
static WORDS: LazyLock<Selector> = LazyLock::new(|| sel("#words-list a"));
static PEOPLE: LazyLock<Selector> = LazyLock::new(|| sel("#people-list a"));
static PLACES: LazyLock<Selector> = LazyLock::new(|| sel("#places-list a"));
static GEO_ITEMS: LazyLock<Selector> = LazyLock::new(|| sel("li.item-large[onclick]"));
static PLACE_LINK: LazyLock<Selector> = LazyLock::new(|| sel(r#"a[href*="/place/"]"#));

static GETGEO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"getgeo\((\d+)\)").unwrap());

const PROVENANCE_LABEL: &str = "Provenance:";
const LANGUAGE_LABEL: &str = "Language/script:";
const MATERIAL_LABEL: &str = "Material:";
const CONTENT_LABEL: &str = "Content (beta!):";
const DATE_PREFIX: &str = "Date: ";
const WORDS_NOISE: &str = "Papyri.info";

/// Read one text page. `number` is the bare catalog number ("12345").
pub fn extract(html_doc: &str, number: &str) -> Record {
    let doc = Html::parse_document(html_doc);

    let mut rec = Record {
        id: format!("{ID_PREFIX} {number}"),
        date: or_placeholder(date(&doc)),
        provenance: or_placeholder(labeled_link(&doc, PROVENANCE_LABEL)),
        language: or_placeholder(labeled_link(&doc, LANGUAGE_LABEL)),
        material: or_placeholder(labeled_link(&doc, MATERIAL_LABEL)),
        content: or_placeholder(
            find_labeled(&doc, &SPAN, CONTENT_LABEL)
                .and_then(next_sibling_text)
                .map(|t| normalize_ws(&t))
                .filter(|t| !t.is_empty()),
        ),
        publications: texts(&doc, &PUBLICATIONS).join(", "),
        collections: texts(&doc, &COLLECTIONS).join(", "),
        archive: or_placeholder(doc.select(&ARCHIVE).next().map(stripped_text)),
        full_text: or_placeholder(full_text(&doc)),
        people: people(&doc),
        irregularities: text_nodes_containing(&doc, IRREGULARITY_SEP)
            .map(|t| t.trim().to_string())
            .collect(),
        ..Record::default()
    };

    // Place names pair up positionally with the ids in the map handlers.
    let names = texts(&doc, &PLACES);
    let ids = geo_handler_ids(&doc);
    for (name, id) in names.into_iter().zip(ids) {
        rec.upsert_place(name, id);
    }

    let geo = geo_id(&doc);
    rec.geo_url = or_placeholder(geo.as_ref().map(|g| join!(PLACE_URL_PREFIX, g)));
    rec.geo_id = or_placeholder(geo);

    rec
}

/* ---------- fields ---------- */

/// The first `div.division` holds "… <first link text> … Date: <date>".
/// Keep what follows the last occurrence of the page's first link text.
fn date(doc: &Html) -> Option<String> {
    let division = text_of(doc.select(&DIVISION).next()?);
    let division = division.trim();
    let marker = doc
        .select(&FIRST_LINK)
        .next()
        .map(|a| text_of(a).trim().to_string())
        .unwrap_or_default();

    let tail = if marker.is_empty() {
        division
    } else {
        division.rsplit(marker.as_str()).next().unwrap_or(division)
    };
    let date = tail.trim().replace(DATE_PREFIX, "");
    if date.is_empty() { None } else { Some(date) }
}

fn labeled_link(doc: &Html, label: &str) -> Option<String> {
    find_labeled(doc, &SPAN, label)
        .and_then(|span| next_sibling_tag(span, "a"))
        .map(text_of)
}

fn full_text(doc: &Html) -> Option<String> {
    let words: Vec<String> = doc
        .select(&WORDS)
        .map(|a| text_of(a).replace(WORDS_NOISE, ""))
        .collect();
    if words.is_empty() { None } else { Some(words.join(" ")) }
}

/// Joined on ", " then split again, so a single link holding "A, B" yields two names.
fn people(doc: &Html) -> Vec<String> {
    let joined = texts(doc, &PEOPLE).join(", ");
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(", ").map(str::to_string).collect()
}

fn geo_handler_ids(doc: &Html) -> Vec<String> {
    doc.select(&GEO_ITEMS)
        .filter_map(|li| li.value().attr("onclick"))
        .filter_map(|handler| GETGEO.captures(handler))
        .map(|caps| s!(&caps[1]))
        .collect()
}

fn geo_id(doc: &Html) -> Option<String> {
    let href = doc.select(&PLACE_LINK).next()?.value().attr("href")?;
    let last = href.trim_end_matches('/').rsplit('/').next()?;
    if last.is_empty() { None } else { Some(s!(last)) }
}
