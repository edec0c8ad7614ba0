// src/record.rs
//
// One papyrus entry and its flat CSV shape.
//
// Scalar fields are stored verbatim; absent values carry the placeholder.
// List fields are typed here and JSON-encoded in their CSV cells. Decoding
// also accepts the older literal encodings (see core::literal) and the
// legacy header names, so files written by earlier tools keep loading.

use serde::{Deserialize, Serialize};

use crate::core::literal::{self, Literal};
use crate::core::sanitize::is_missing;
use crate::error::{Error, Result};

pub const IRREGULARITY_SEP: &str = ": read ";
const NCOLS: usize = 15;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub geo_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub date: String,
    pub provenance: String,
    pub language: String,
    pub material: String,
    pub content: String,
    pub publications: String,
    pub collections: String,
    pub archive: String,
    pub full_text: String,
    pub people: Vec<String>,
    pub places: Vec<Place>,
    pub irregularities: Vec<String>,
    pub geo_id: String,
    pub geo_url: String,
}

/// An irregularity entry split into its two readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Irregularity<'a> {
    pub original: &'a str,
    pub correction: &'a str,
}

impl<'a> Irregularity<'a> {
    /// `"original: read correction"` → pair. Exactly one separator is required.
    pub fn parse(entry: &'a str) -> Option<Self> {
        let mut parts = entry.split(IRREGULARITY_SEP);
        let original = parts.next()?.trim();
        let correction = parts.next()?.trim();
        if parts.next().is_some() || original.is_empty() {
            return None;
        }
        Some(Self { original, correction })
    }
}

impl Record {
    pub fn irregularity_pairs(&self) -> impl Iterator<Item = Irregularity<'_>> {
        self.irregularities.iter().filter_map(|s| Irregularity::parse(s))
    }

    pub fn place_names(&self) -> impl Iterator<Item = &str> {
        self.places.iter().map(|p| p.name.as_str())
    }

    /// Insert or update a place. A repeated name keeps its first position.
    pub fn upsert_place(&mut self, name: String, geo_id: String) {
        match self.places.iter_mut().find(|p| p.name == name) {
            Some(p) => p.geo_id = geo_id,
            None => self.places.push(Place { name, geo_id }),
        }
    }
}

/* ---------------- Columns ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Date,
    Provenance,
    Language,
    Material,
    Content,
    Publications,
    Collections,
    Archive,
    FullText,
    People,
    Places,
    Irregularities,
    GeoId,
    GeoUrl,
}

impl Column {
    pub const ALL: [Column; NCOLS] = [
        Column::Id,
        Column::Date,
        Column::Provenance,
        Column::Language,
        Column::Material,
        Column::Content,
        Column::Publications,
        Column::Collections,
        Column::Archive,
        Column::FullText,
        Column::People,
        Column::Places,
        Column::Irregularities,
        Column::GeoId,
        Column::GeoUrl,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Date => "Date",
            Column::Provenance => "Provenance",
            Column::Language => "Language/Script",
            Column::Material => "Material",
            Column::Content => "Content",
            Column::Publications => "Publications",
            Column::Collections => "Collections",
            Column::Archive => "Archive",
            Column::FullText => "Full Text",
            Column::People => "People List",
            Column::Places => "Places List",
            Column::Irregularities => "Text Irregularities",
            Column::GeoId => "TM Geo",
            Column::GeoUrl => "Geo URL",
        }
    }

    /// Older header spellings still accepted on read.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::Content => &["Content (beta!)"],
            Column::FullText => &["Texte principal", "Main Text"],
            Column::People => &["Personnes", "People"],
            Column::Places => &["Lieux", "Places"],
            Column::Irregularities => &["Irrégularités textuelles", "Irregularities"],
            Column::GeoUrl => &["Geo JSON"],
            _ => &[],
        }
    }

    fn matches(self, header: &str) -> bool {
        let h = header.trim();
        h.eq_ignore_ascii_case(self.header())
            || self.aliases().iter().any(|a| h.eq_ignore_ascii_case(a))
    }
}

pub fn headers() -> Vec<String> {
    Column::ALL.iter().map(|c| s!(c.header())).collect()
}

/// Column positions resolved against one file's header row.
#[derive(Clone, Debug)]
pub struct ColumnMap {
    idx: [Option<usize>; NCOLS],
}

impl ColumnMap {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut idx = [None; NCOLS];
        for (slot, col) in idx.iter_mut().zip(Column::ALL) {
            *slot = headers.iter().position(|h| col.matches(h.as_ref()));
        }
        Self { idx }
    }

    pub fn has(&self, col: Column) -> bool {
        self.idx[col as usize].is_some()
    }

    pub fn require(&self, col: Column) -> Result<()> {
        if self.has(col) { Ok(()) } else { Err(Error::MissingColumn(col.header())) }
    }

    /// The cell for `col`, or "" when the column or cell is absent.
    pub fn cell<'r, S: AsRef<str>>(&self, row: &'r [S], col: Column) -> &'r str {
        self.idx[col as usize]
            .and_then(|i| row.get(i))
            .map(|s| s.as_ref())
            .unwrap_or("")
    }

    pub fn record<S: AsRef<str>>(&self, row: &[S]) -> Result<Record> {
        let get = |c| s!(self.cell(row, c));
        let id = get(Column::Id);
        Ok(Record {
            people: decode_names(self.cell(row, Column::People), &id, Column::People)?,
            places: decode_places(self.cell(row, Column::Places), &id)?,
            irregularities: decode_list(self.cell(row, Column::Irregularities), &id, Column::Irregularities)?,
            date: get(Column::Date),
            provenance: get(Column::Provenance),
            language: get(Column::Language),
            material: get(Column::Material),
            content: get(Column::Content),
            publications: get(Column::Publications),
            collections: get(Column::Collections),
            archive: get(Column::Archive),
            full_text: get(Column::FullText),
            geo_id: get(Column::GeoId),
            geo_url: get(Column::GeoUrl),
            id,
        })
    }
}

/* ---------------- Encoding ---------------- */

pub fn to_row(r: &Record) -> Result<Vec<String>> {
    Ok(vec![
        r.id.clone(),
        r.date.clone(),
        r.provenance.clone(),
        r.language.clone(),
        r.material.clone(),
        r.content.clone(),
        r.publications.clone(),
        r.collections.clone(),
        r.archive.clone(),
        r.full_text.clone(),
        serde_json::to_string(&r.people)?,
        serde_json::to_string(&r.places)?,
        serde_json::to_string(&r.irregularities)?,
        r.geo_id.clone(),
        r.geo_url.clone(),
    ])
}

fn malformed(id: &str, column: Column, message: impl Into<String>) -> Error {
    Error::Encoding { id: s!(id), column: column.header(), message: message.into() }
}

/// A list of strings, JSON first, then the literal form.
pub fn decode_list(cell: &str, id: &str, column: Column) -> Result<Vec<String>> {
    if is_missing(cell) {
        return Ok(Vec::new());
    }
    let json_err = match serde_json::from_str::<Vec<String>>(cell) {
        Ok(v) => return Ok(v),
        Err(e) => e,
    };
    match literal::parse(cell) {
        Ok(Literal::List(v)) => Ok(v),
        Ok(Literal::Map(_)) => Err(malformed(id, column, "expected a list, found a mapping")),
        Err(_) => Err(malformed(id, column, json_err.to_string())),
    }
}

/// Like `decode_list`, minus blank entries (an empty scrape used to store `['']`).
fn decode_names(cell: &str, id: &str, column: Column) -> Result<Vec<String>> {
    let mut v = decode_list(cell, id, column)?;
    v.retain(|s| !s.trim().is_empty());
    Ok(v)
}

/// Places as typed objects, a name→id mapping, or a bare list of names.
pub fn decode_places(cell: &str, id: &str) -> Result<Vec<Place>> {
    if is_missing(cell) {
        return Ok(Vec::new());
    }
    let json_err = match serde_json::from_str::<Vec<Place>>(cell) {
        Ok(v) => return Ok(v),
        Err(e) => e,
    };
    if let Ok(map) = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(cell) {
        return Ok(map
            .into_iter()
            .map(|(name, v)| Place {
                name,
                geo_id: v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()),
            })
            .collect());
    }
    let places: Vec<Place> = match literal::parse(cell) {
        Ok(Literal::Map(pairs)) => pairs
            .into_iter()
            .map(|(name, geo_id)| Place { name, geo_id })
            .collect(),
        Ok(Literal::List(names)) => names
            .into_iter()
            .map(|name| Place { name, geo_id: s!() })
            .collect(),
        Err(_) => return Err(malformed(id, Column::Places, json_err.to_string())),
    };
    Ok(places.into_iter().filter(|p| !p.name.trim().is_empty()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            id: s!("TM 1"),
            date: s!("AD 300"),
            full_text: s!("text"),
            people: vec![s!("Aurelios")],
            places: vec![Place { name: s!("Oxyrhynchos"), geo_id: s!("1524") }],
            irregularities: vec![s!("παρα: read παρά")],
            ..Record::default()
        }
    }

    #[test]
    fn row_shape_matches_headers() {
        let row = to_row(&sample()).unwrap();
        assert_eq!(row.len(), headers().len());
        assert_eq!(row[10], r#"["Aurelios"]"#);
        assert_eq!(row[11], r#"[{"name":"Oxyrhynchos","geo_id":"1524"}]"#);
    }

    #[test]
    fn record_reads_back_from_its_row() {
        let map = ColumnMap::new(&headers());
        let row = to_row(&sample()).unwrap();
        assert_eq!(map.record(&row).unwrap(), sample());
    }

    #[test]
    fn legacy_headers_and_literals() {
        let hdr = ["ID", "Texte principal", "Personnes", "Lieux", "Irrégularités textuelles"];
        let row = ["TM 2", "καὶ", "['']", "{'Oxyrhynchos': '1524'}", "['a: read b']"];
        let map = ColumnMap::new(&hdr);
        let r = map.record(&row).unwrap();
        assert_eq!(r.full_text, "καὶ");
        assert!(r.people.is_empty());
        assert_eq!(r.places, vec![Place { name: s!("Oxyrhynchos"), geo_id: s!("1524") }]);
        assert_eq!(r.irregularities, vec![s!("a: read b")]);
        assert_eq!(r.date, "");
    }

    #[test]
    fn malformed_list_names_record_and_column() {
        let map = ColumnMap::new(&["ID", "Text Irregularities"]);
        let err = map.record(&["TM 3", "['unterminated"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("TM 3"), "{msg}");
        assert!(msg.contains("Text Irregularities"), "{msg}");
    }

    #[test]
    fn places_accept_plain_names_and_json_maps() {
        assert_eq!(decode_places("['Theadelphia']", "x").unwrap()[0].name, "Theadelphia");
        let from_map = decode_places(r#"{"Karanis": 77}"#, "x").unwrap();
        assert_eq!(from_map, vec![Place { name: s!("Karanis"), geo_id: s!("77") }]);
        assert!(decode_places("nan", "x").unwrap().is_empty());
    }

    #[test]
    fn place_mappings_keep_their_order() {
        let names = |v: Vec<Place>| v.into_iter().map(|p| p.name).collect::<Vec<_>>();
        let json = decode_places(r#"{"Zeta": "1", "Alpha": "2"}"#, "x").unwrap();
        assert_eq!(names(json), vec!["Zeta", "Alpha"]);
        let legacy = decode_places("{'Zeta': '1', 'Alpha': '2'}", "x").unwrap();
        assert_eq!(names(legacy), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn irregularity_pairs() {
        assert_eq!(
            Irregularity::parse("παρα: read παρά"),
            Some(Irregularity { original: "παρα", correction: "παρά" })
        );
        assert_eq!(Irregularity::parse("no separator"), None);
        assert_eq!(Irregularity::parse("a: read b: read c"), None);
    }

    #[test]
    fn upsert_keeps_first_position() {
        let mut r = Record::default();
        r.upsert_place(s!("A"), s!("1"));
        r.upsert_place(s!("B"), s!("2"));
        r.upsert_place(s!("A"), s!("3"));
        assert_eq!(r.place_names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(r.places[0].geo_id, "3");
    }
}
