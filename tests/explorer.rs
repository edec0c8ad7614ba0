// tests/explorer.rs
use papyrus_scrape::Error;
use papyrus_scrape::data::Corpus;
use papyrus_scrape::explore::{ExplorerView, Filters, IrregularityStats, Lookup};
use papyrus_scrape::record::{self, Place};

/// Same two records, once in the current JSON encoding and once the way
/// older tools wrote them (literal lists, French headers, name→id mapping).
const JSON_CORPUS: &str = r#"ID,Date,Provenance,Full Text,People List,Places List,Text Irregularities
TM 1,AD 300 - AD 350,Oxyrhynchos,παρα τον παραδεισον εἶπεν ὁ Λόγος,"[""Aurelios Apion"",""Tiberios""]","[{""name"":""Oxyrhynchos"",""geo_id"":""1524""}]","[""παρα: read παρά""]"
TM 2,AD 520,Hermopolis,καὶ λόγος,"[""Apion""]","[]",[]
"#;

const LEGACY_CORPUS: &str = r#"ID,Date,Provenance,Texte principal,Personnes,Lieux,Irrégularités textuelles
TM 1,AD 300 - AD 350,Oxyrhynchos,παρα τον παραδεισον εἶπεν ὁ Λόγος,"['Aurelios Apion', 'Tiberios']",{'Oxyrhynchos': '1524'},['παρα: read παρά']
TM 2,AD 520,Hermopolis,καὶ λόγος,['Apion'],{},['']
"#;

fn corpus() -> Corpus {
    Corpus::from_reader(JSON_CORPUS.as_bytes()).unwrap()
}

#[test]
fn legacy_encoding_reads_the_same() {
    let json = corpus();
    let legacy = Corpus::from_reader(LEGACY_CORPUS.as_bytes()).unwrap();
    assert_eq!(json.len(), 2);

    let (a, b) = (&json.records()[0], &legacy.records()[0]);
    assert_eq!(a.people, b.people);
    assert_eq!(a.places, b.places);
    assert_eq!(a.irregularities, b.irregularities);
    assert_eq!(a.full_text, b.full_text);
    assert_eq!(a.places, vec![Place { name: "Oxyrhynchos".into(), geo_id: "1524".into() }]);

    // ['']: a blank list entry is kept for irregularities, counted like any other
    assert_eq!(legacy.records()[1].irregularities, vec![String::new()]);
}

#[test]
fn keyword_search_ignores_case_and_bolds() {
    let c = corpus();
    let f = Filters { query: "λόγος".into(), ..Filters::default() };
    let v = ExplorerView::compute(&c, &f);

    let ids: Vec<&str> = v.hits.iter().map(|h| h.record.id.as_str()).collect();
    assert_eq!(ids, ["TM 1", "TM 2"]);
    assert!(v.hits[0].excerpt.contains("**Λόγος**"));
    assert!(v.hits[1].excerpt.ends_with("**λόγος**..."));
}

#[test]
fn search_ignores_filters() {
    let c = corpus();
    let f = Filters {
        provenance: Some("Hermopolis".into()),
        query: "Λόγος".into(),
        ..Filters::default()
    };
    let v = ExplorerView::compute(&c, &f);
    assert_eq!(v.visible, [1]);
    assert_eq!(v.hits.len(), 2);
}

#[test]
fn detail_splices_corrections() {
    let c = corpus();
    let v = ExplorerView::compute(&c, &Filters::default());
    let d = v.detail.expect("first record selected");
    assert_eq!(d.record.id, "TM 1");
    assert!(d.annotated.starts_with("~~παρα~~ **παρά** τον παραδεισον"));
}

#[test]
fn person_lookup_lists_every_mention() {
    let c = corpus();
    let mut f = Filters::default();
    f.select("TM 1");
    f.lookup = Some(Lookup::Person("Apion".into()));
    let rel = ExplorerView::compute(&c, &f).related.unwrap();
    assert_eq!(rel.ids, ["TM 1", "TM 2"]);

    f.lookup = Some(Lookup::Place("Oxyrhynchos".into()));
    let rel = ExplorerView::compute(&c, &f).related.unwrap();
    assert_eq!(rel.ids, ["TM 1"]);
}

#[test]
fn year_range_filter() {
    let c = corpus();
    let f = Filters { years: Some((400, 600)), ..Filters::default() };
    let v = ExplorerView::compute(&c, &f);
    assert_eq!(v.year_bounds, Some((300, 520)));
    assert_eq!(v.visible, [1]);
    assert_eq!(v.detail.unwrap().record.id, "TM 2");
}

#[test]
fn statistics_from_loaded_corpus() {
    let st = IrregularityStats::compute(&corpus());
    assert_eq!(st.per_record, vec![("TM 1".to_string(), 1), ("TM 2".to_string(), 0)]);
    assert_eq!(st.frequencies, vec![("παρα: read παρά".to_string(), 1)]);
}

#[test]
fn malformed_list_fails_the_load() {
    let bad = "ID,People List\nTM 1,\"['unterminated\"\n";
    match Corpus::from_reader(bad.as_bytes()) {
        Err(Error::Encoding { id, column, .. }) => {
            assert_eq!(id, "TM 1");
            assert_eq!(column, record::Column::People.header());
        }
        other => panic!("expected an encoding error, got {other:?}"),
    }
}
