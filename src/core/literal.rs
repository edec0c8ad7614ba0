// src/core/literal.rs
//
// Reader for the flat list/dict literals older corpus files carry in their
// list columns, e.g. `['Aurelios', "Apion"]` or `{'Oxyrhynchos': '1524'}`.
// Only one level deep: items are quoted strings or bare scalars.

use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    List(Vec<String>),
    Map(Vec<(String, String)>),
}

pub fn parse(src: &str) -> Result<Literal, String> {
    let mut p = Parser { it: src.trim().chars().peekable() };
    let lit = match p.it.next() {
        Some('[') => Literal::List(p.items(']', false)?.into_iter().map(|(k, _)| k).collect()),
        Some('{') => Literal::Map(p.items('}', true)?),
        Some(c) => return Err(format!("expected '[' or '{{', found {c:?}")),
        None => return Err(s!("empty literal")),
    };
    p.skip_ws();
    match p.it.next() {
        None => Ok(lit),
        Some(c) => Err(format!("trailing input starting at {c:?}")),
    }
}

struct Parser<'a> {
    it: Peekable<Chars<'a>>,
}

impl Parser<'_> {
    fn skip_ws(&mut self) {
        while self.it.next_if(|c| c.is_whitespace()).is_some() {}
    }

    /// Comma separated items up to `close`. With `pairs`, each item is `key: value`.
    fn items(&mut self, close: char, pairs: bool) -> Result<Vec<(String, String)>, String> {
        let mut out = Vec::new();
        loop {
            self.skip_ws();
            if self.it.next_if_eq(&close).is_some() {
                return Ok(out);
            }
            let key = self.scalar()?;
            let value = if pairs {
                self.skip_ws();
                if self.it.next_if_eq(&':').is_none() {
                    return Err(format!("expected ':' after {key:?}"));
                }
                self.skip_ws();
                self.scalar()?
            } else {
                s!()
            };
            out.push((key, value));

            self.skip_ws();
            match self.it.next() {
                Some(',') => continue,
                Some(c) if c == close => return Ok(out),
                Some(c) => return Err(format!("expected ',' or {close:?}, found {c:?}")),
                None => return Err(format!("unterminated literal, missing {close:?}")),
            }
        }
    }

    fn scalar(&mut self) -> Result<String, String> {
        match self.it.peek().copied() {
            Some(q @ ('\'' | '"')) => {
                self.it.next();
                self.quoted(q)
            }
            Some(_) => {
                let mut out = s!();
                while let Some(c) = self.it.next_if(|c| !matches!(c, ',' | ':' | ']' | '}')) {
                    out.push(c);
                }
                let out = out.trim().to_string();
                if out.is_empty() { Err(s!("empty item")) } else { Ok(out) }
            }
            None => Err(s!("unexpected end of literal")),
        }
    }

    fn quoted(&mut self, quote: char) -> Result<String, String> {
        let mut out = s!();
        while let Some(c) = self.it.next() {
            match c {
                '\\' => match self.it.next() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some(other) => out.push(other),
                    None => break,
                },
                c if c == quote => return Ok(out),
                c => out.push(c),
            }
        }
        Err(s!("unterminated string"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_list() {
        let lit = parse(r#"['Aurelios', "Apion's son", 'a\'b']"#).unwrap();
        assert_eq!(
            lit,
            Literal::List(vec![s!("Aurelios"), s!("Apion's son"), s!("a'b")])
        );
    }

    #[test]
    fn python_dict() {
        let lit = parse("{'Oxyrhynchos': '1524', 'Alexandria': 2}").unwrap();
        assert_eq!(
            lit,
            Literal::Map(vec![
                (s!("Oxyrhynchos"), s!("1524")),
                (s!("Alexandria"), s!("2")),
            ])
        );
    }

    #[test]
    fn empty_containers() {
        assert_eq!(parse("[]").unwrap(), Literal::List(vec![]));
        assert_eq!(parse(" {} ").unwrap(), Literal::Map(vec![]));
        assert_eq!(parse("['']").unwrap(), Literal::List(vec![s!()]));
    }

    #[test]
    fn malformed() {
        assert!(parse("['a'").is_err());
        assert!(parse("['a' 'b']").is_err());
        assert!(parse("{'a'}").is_err());
        assert!(parse("plain text").is_err());
        assert!(parse("['a'] extra").is_err());
    }
}
