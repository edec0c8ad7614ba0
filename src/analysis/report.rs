// src/analysis/report.rs
//
// Plain-text rendering of an Analysis: summary lines, a proportion table for
// genres and horizontal bar charts for places and years.

use std::fmt::Write;

use super::Analysis;

const BAR_WIDTH: usize = 40;
const BAR: char = '█';

fn bar(count: usize, max: usize) -> String {
    if max == 0 || count == 0 {
        return s!();
    }
    let n = (count * BAR_WIDTH).div_ceil(max);
    std::iter::repeat_n(BAR, n).collect()
}

fn label_width<'a, I: IntoIterator<Item = &'a str>>(labels: I) -> usize {
    labels.into_iter().map(|l| l.chars().count()).max().unwrap_or(0)
}

pub fn render(a: &Analysis) -> String {
    let mut out = s!();
    // Writing to a String cannot fail.
    let _ = write_summary(&mut out, a);
    let _ = write_genres(&mut out, a);
    let _ = write_cities(&mut out, a);
    let _ = write_years(&mut out, a);
    out
}

fn write_summary(out: &mut String, a: &Analysis) -> std::fmt::Result {
    writeln!(out, "Rows loaded:               {}", a.total)?;
    writeln!(out, "Texts not captured:        {}", a.missing_text)?;
    writeln!(out, "Papyri after cleaning:     {}", a.kept)?;
    writeln!(out, "Reused papyri:             {}", a.reused)?;
    writeln!(out, "With a normalized date:    {}", a.dated)?;
    writeln!(out, "With a year:               {}", a.year_count())
}

fn write_genres(out: &mut String, a: &Analysis) -> std::fmt::Result {
    writeln!(out, "\nGenre distribution")?;
    if a.genres.is_empty() {
        return writeln!(out, "  (none)");
    }
    let w = label_width(a.genres.iter().map(|(g, _)| g.as_str()));
    let max = a.genres.first().map(|(_, c)| *c).unwrap_or(0);
    for (g, c) in &a.genres {
        let pct = a.genre_share(*c) * 100.0;
        writeln!(out, "  {g:<w$}  {c:>5}  {pct:>5.1}%  {}", bar(*c, max))?;
    }
    Ok(())
}

fn write_cities(out: &mut String, a: &Analysis) -> std::fmt::Result {
    writeln!(out, "\nPlaces of provenance")?;
    if a.cities.is_empty() {
        return writeln!(out, "  (none)");
    }
    let w = label_width(a.cities.iter().map(|(k, _)| k.as_str()));
    let max = a.cities.first().map(|(_, c)| *c).unwrap_or(0);
    for (k, c) in &a.cities {
        writeln!(out, "  {k:<w$}  {c:>5}  {}", bar(*c, max))?;
    }
    Ok(())
}

fn write_years(out: &mut String, a: &Analysis) -> std::fmt::Result {
    let (Some((lo, _)), Some((hi, _))) = (a.years.first(), a.years.last()) else {
        writeln!(out, "\nPapyri per year")?;
        return writeln!(out, "  (none)");
    };
    writeln!(out, "\nPapyri per year (AD {lo} – AD {hi}, empty years omitted)")?;
    let max = a.years.iter().map(|(_, c)| *c).max().unwrap_or(0);
    for (y, c) in a.years.iter().filter(|(_, c)| *c > 0) {
        writeln!(out, "  {y:>4}  {c:>5}  {}", bar(*c, max))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_sections() {
        let a = Analysis {
            total: 5,
            missing_text: 1,
            kept: 4,
            genres: vec![(s!("Letter"), 3), (s!("Contract"), 1)],
            reused: 1,
            cities: vec![(s!("Oxyrhynchos"), 4)],
            dated: 3,
            years: vec![(300, 2), (301, 0), (302, 1)],
        };
        let text = render(&a);
        assert!(text.contains("Texts not captured:        1"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("Oxyrhynchos"));
        assert!(text.contains("AD 300 – AD 302"));
        assert!(!text.contains(" 301 "));
    }

    #[test]
    fn bars_scale_to_max() {
        assert_eq!(bar(0, 10).chars().count(), 0);
        assert_eq!(bar(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(bar(1, 10).chars().count(), 4);
    }

    #[test]
    fn empty_analysis() {
        let text = render(&Analysis::default());
        assert!(text.contains("(none)"));
    }
}
