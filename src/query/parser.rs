//! Query parser for the collection search grammar.
//!
//! Supported syntax (clauses separated by whitespace are ANDed):
//! - Free text: `cat`, `"black cat"`
//! - Negation of any clause: `-cat`, `-nid:12`
//! - Note ids: `nid:12`, `nid:12,13` (alias `identifier:`)
//! - Decks: `deck:current`, `deck:"Japanese::Verbs"` (alias `context:`)
//! - Note types: `note:"Basic"` (alias `type:`)
//! - Field equality: `Front:"cat"`, `"Head Word:cat"`
//!
//! A backslash escapes the next character; an unescaped `:` splits a token
//! into key and value whether or not it sits inside quotes.

use std::iter::Peekable;
use std::str::Chars;

use crate::document::NoteId;
use crate::error::{PopdictError, Result};
use crate::query::{Clause, Occur, Predicate, SearchQuery};

/// Parser turning query strings into [`SearchQuery`] values.
#[derive(Debug, Default)]
pub struct QueryParser;

impl QueryParser {
    /// Create a new query parser.
    pub fn new() -> Self {
        QueryParser
    }

    /// Parse a query string. An empty string matches every note.
    pub fn parse(&self, query_str: &str) -> Result<SearchQuery> {
        let mut parser = QueryStringParser::new(query_str.trim());
        parser.parse()
    }
}

/// Internal parser for parsing query strings.
struct QueryStringParser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> QueryStringParser<'a> {
    fn new(query_str: &'a str) -> Self {
        QueryStringParser {
            chars: query_str.chars().peekable(),
        }
    }

    fn parse(&mut self) -> Result<SearchQuery> {
        let mut clauses = Vec::new();
        loop {
            self.skip_whitespace();
            if self.chars.peek().is_none() {
                break;
            }
            clauses.push(self.parse_clause()?);
        }
        Ok(SearchQuery::new(clauses))
    }

    fn parse_clause(&mut self) -> Result<Clause> {
        let occur = if self.chars.peek() == Some(&'-') {
            self.chars.next();
            Occur::MustNot
        } else {
            Occur::Must
        };

        let raw = self.consume_token()?;
        if raw.is_empty() && occur == Occur::MustNot {
            return Err(PopdictError::query("negation without a search term"));
        }

        let predicate = match split_key(&raw) {
            Some((key, value)) => parse_keyed(&unescape(key), unescape(value))?,
            None => Predicate::Text(unescape(&raw)),
        };

        Ok(Clause { occur, predicate })
    }

    /// Read one whitespace-delimited token, dropping unescaped quotes and
    /// keeping escape pairs intact for the key/value split.
    fn consume_token(&mut self) -> Result<String> {
        let mut token = String::new();
        let mut in_quotes = false;

        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() && !in_quotes {
                break;
            }
            self.chars.next();
            match ch {
                '"' => in_quotes = !in_quotes,
                '\\' => {
                    let escaped = self
                        .chars
                        .next()
                        .ok_or_else(|| PopdictError::query("dangling escape at end of query"))?;
                    token.push('\\');
                    token.push(escaped);
                }
                _ => token.push(ch),
            }
        }

        if in_quotes {
            return Err(PopdictError::query("unterminated quote"));
        }
        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.chars.peek() {
            if ch.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }
}

/// Split at the first unescaped colon.
fn split_key(raw: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (i, ch) in raw.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            ':' => return Some((&raw[..i], &raw[i + 1..])),
            _ => {}
        }
    }
    None
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

fn parse_keyed(key: &str, value: String) -> Result<Predicate> {
    if key.is_empty() {
        return Err(PopdictError::query(format!("empty field name before {value:?}")));
    }

    match key.to_lowercase().as_str() {
        "nid" | "identifier" => {
            let ids = value
                .split(',')
                .map(|id| {
                    id.trim()
                        .parse::<i64>()
                        .map(NoteId)
                        .map_err(|_| PopdictError::query(format!("invalid note id: {id:?}")))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Predicate::NoteIds(ids))
        }
        "deck" | "context" => {
            if value.eq_ignore_ascii_case("current") {
                Ok(Predicate::CurrentDeck)
            } else {
                Ok(Predicate::Deck(value))
            }
        }
        "note" | "type" => Ok(Predicate::NoteType(value)),
        _ => Ok(Predicate::Field {
            name: key.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> SearchQuery {
        QueryParser::new().parse(query).unwrap()
    }

    #[test]
    fn test_empty_query() {
        assert!(parse("   ").clauses().is_empty());
    }

    #[test]
    fn test_quoted_text() {
        let query = parse(r#""black cat""#);
        assert_eq!(
            query.clauses(),
            [Clause::must(Predicate::Text("black cat".to_string()))]
        );
    }

    #[test]
    fn test_snippet_query() {
        let query = parse(r#""cat" -nid:10 -nid:20 deck:current"#);

        assert_eq!(
            query.clauses(),
            [
                Clause::must(Predicate::Text("cat".to_string())),
                Clause::must_not(Predicate::NoteIds(vec![NoteId(10)])),
                Clause::must_not(Predicate::NoteIds(vec![NoteId(20)])),
                Clause::must(Predicate::CurrentDeck),
            ]
        );
    }

    #[test]
    fn test_dictionary_query() {
        let query = parse(r#"note:"Dictionary" Term:"cat""#);

        assert_eq!(
            query.clauses(),
            [
                Clause::must(Predicate::NoteType("Dictionary".to_string())),
                Clause::must(Predicate::Field {
                    name: "Term".to_string(),
                    value: "cat".to_string()
                }),
            ]
        );
    }

    #[test]
    fn test_generic_aliases() {
        let query = parse(r#"-identifier:3 context:current type:"Basic""#);

        assert_eq!(
            query.clauses(),
            [
                Clause::must_not(Predicate::NoteIds(vec![NoteId(3)])),
                Clause::must(Predicate::CurrentDeck),
                Clause::must(Predicate::NoteType("Basic".to_string())),
            ]
        );
    }

    #[test]
    fn test_escapes() {
        let query = parse(r#""say \"hi\" deck\:x""#);
        assert_eq!(
            query.clauses(),
            [Clause::must(Predicate::Text(r#"say "hi" deck:x"#.to_string()))]
        );
    }

    #[test]
    fn test_quoted_field_with_space() {
        let query = parse(r#""Head Word:neko""#);
        assert_eq!(
            query.clauses(),
            [Clause::must(Predicate::Field {
                name: "Head Word".to_string(),
                value: "neko".to_string()
            })]
        );
    }

    #[test]
    fn test_quoted_field_with_leading_dash() {
        let query = parse(r#"note:"Dictionary" "-Word:x""#);
        assert_eq!(
            query.clauses(),
            [
                Clause::must(Predicate::NoteType("Dictionary".to_string())),
                Clause::must(Predicate::Field {
                    name: "-Word".to_string(),
                    value: "x".to_string()
                }),
            ]
        );
    }

    #[test]
    fn test_nid_list() {
        let query = parse("nid:1,2,3");
        assert_eq!(
            query.clauses(),
            [Clause::must(Predicate::NoteIds(vec![
                NoteId(1),
                NoteId(2),
                NoteId(3)
            ]))]
        );
    }

    #[test]
    fn test_errors() {
        let parser = QueryParser::new();

        assert!(parser.parse(r#""unterminated"#).is_err());
        assert!(parser.parse("nid:abc").is_err());
        assert!(parser.parse(r"trailing\").is_err());
        assert!(parser.parse(":value").is_err());
        assert!(parser.parse("cat -").is_err());
    }
}
