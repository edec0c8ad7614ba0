// tests/analysis_e2e.rs
use std::fs;

use papyrus_scrape::analysis::{self, normalize_date, report, year};
use papyrus_scrape::config::options::{AnalyzeOptions, YearRule};
use papyrus_scrape::csv::read_table;

const CORPUS: &str = "\
ID,Date,Provenance,Content,Publications,Full Text
TM1,something AD 350 - AD 400 extra,\"Oxyrhynchos, Oxyrhynchites\",Letter private,P.Oxy. 1 reused,καὶ
TM2,AD 352,\"Oxyrhynchos, Oxyrhynchites\",Letter official,SB 1,λόγος
TM3,BC 12,Hermopolis,Contract sale,,παρα
TM4,AD 1020,Hermopolis,Letter,,nan
TM5,AD 1005,,Account,P.Lond. reused,τον
";

fn write_corpus(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("corpus.csv");
    fs::write(&path, CORPUS).unwrap();
    path
}

#[test]
fn scenario_date_and_year() {
    let date = normalize_date("something AD 350 - AD 400 extra").unwrap();
    assert_eq!(date, "AD 350 - AD 400");
    assert_eq!(year(date, YearRule::AnyDigits), Some(350));
    assert_eq!(year(date, YearRule::FourDigit), None);
}

#[test]
fn end_to_end_with_tables() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_corpus(dir.path());
    let out_dir = dir.path().join("tables");

    let opts = AnalyzeOptions { year_rule: YearRule::AnyDigits, out_dir: Some(out_dir.clone()) };
    let a = analysis::run(&input, &opts).unwrap();

    assert_eq!(a.total, 5);
    assert_eq!(a.missing_text, 1);
    assert_eq!(a.kept, 4);
    assert_eq!(
        a.genres,
        vec![
            ("Letter".to_string(), 2),
            ("Account".to_string(), 1),
            ("Contract".to_string(), 1),
        ]
    );
    assert_eq!(a.reused, 2);
    assert_eq!(a.cities, vec![("Oxyrhynchos".to_string(), 2), ("Hermopolis".to_string(), 1)]);
    assert_eq!(a.dated, 3);
    assert_eq!(a.years.first(), Some(&(350, 1)));
    assert_eq!(a.years.last(), Some(&(1005, 1)));
    assert_eq!(a.years.len(), 1005 - 350 + 1);
    assert_eq!(a.year_count(), 3);

    let genres = read_table(&out_dir.join("genres.csv")).unwrap();
    assert_eq!(genres.headers, ["Genre", "Count", "Share"]);
    assert_eq!(genres.rows[0], ["Letter", "2", "0.5000"]);
    let years = read_table(&out_dir.join("years.csv")).unwrap();
    assert_eq!(years.rows.len(), a.years.len());
    assert!(out_dir.join("cities.csv").exists());

    let text = report::render(&a);
    assert!(text.contains("Oxyrhynchos"));
    assert!(text.contains("Letter"));
}

#[test]
fn four_digit_rule_keeps_only_long_years() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_corpus(dir.path());
    let opts = AnalyzeOptions { year_rule: YearRule::FourDigit, out_dir: None };
    let a = analysis::run(&input, &opts).unwrap();
    assert_eq!(a.years, vec![(1005, 1)]);
}

#[test]
fn missing_id_column_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "Date,Full Text\nAD 1,x\n").unwrap();
    assert!(analysis::run(&path, &AnalyzeOptions::default()).is_err());
}
