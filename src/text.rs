//! Line handling shared by the mesh and quadtree readers.
//!
//! Both dump formats are line-oriented: headers are split on whitespace, data lines on tabs.
//! Any line whose first whitespace-delimited token is `>` is a comment and never takes part in
//! section counting.

use std::str::FromStr;

use crate::error::FormatErrorKind;

/// Token which marks a comment line.
pub const COMMENT: &str = ">";

/// A line which survived comment stripping, tagged with its 1-based position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'src> {
    pub number: usize,
    pub text: &'src str,
}

impl<'src> Line<'src> {
    /// The first whitespace-delimited token, if it looks like a section keyword (all uppercase
    /// ASCII letters).
    pub fn keyword(&self) -> Option<&'src str> {
        self.text
            .split_whitespace()
            .next()
            .filter(|tok| tok.bytes().all(|b| b.is_ascii_uppercase()))
    }

    /// Whitespace-separated tokens of a header line.
    pub fn tokens(&self) -> impl Iterator<Item = &'src str> {
        self.text.split_whitespace()
    }

    /// Tab-separated fields of a data line. Padding around each field is dropped; a leading or
    /// trailing tab still delimits an (empty) field.
    pub fn fields(&self) -> Vec<&'src str> {
        self.text
            .trim_matches(|c: char| c == ' ' || c == '\r')
            .split('\t')
            .map(str::trim)
            .collect()
    }

    /// [Self::fields], requiring exactly `expected` of them.
    pub fn exact_fields(&self, expected: usize) -> Result<Vec<&'src str>, FormatErrorKind> {
        let fields = self.fields();
        if fields.len() != expected {
            return Err(FormatErrorKind::FieldCount {
                expected,
                found: fields.len(),
            });
        }
        Ok(fields)
    }
}

/// Whether `line` is a comment.
#[inline]
pub fn is_comment(line: &str) -> bool {
    line.split_whitespace().next() == Some(COMMENT)
}

/// Iterate through the lines of `src` that carry data, skipping comments and blank lines.
pub fn strip_comments(src: &str) -> impl Iterator<Item = Line<'_>> {
    src.lines()
        .enumerate()
        .map(|(i, text)| Line {
            number: i + 1,
            text: text.trim_end_matches('\r'),
        })
        .filter(|line| !line.text.trim().is_empty() && !is_comment(line.text))
}

/// Copy of `src` with every comment and blank line removed.
pub fn without_comments(src: &str) -> String {
    let mut res = String::with_capacity(src.len());
    for line in strip_comments(src) {
        res.push_str(line.text);
        res.push('\n');
    }
    res
}

/// Parse a single token, reporting which token failed on error.
pub fn parse_token<T: FromStr>(token: &str) -> Result<T, FormatErrorKind> {
    token
        .parse()
        .map_err(|_| FormatErrorKind::InvalidNumber(token.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_keep_line_numbers() {
        let src = "> generated\nNODES 1\n\n>\tnote\n1\t0.0\t0.0\n";
        let lines: Vec<_> = strip_comments(src).collect();
        assert_eq!(
            lines,
            vec![
                Line {
                    number: 2,
                    text: "NODES 1"
                },
                Line {
                    number: 5,
                    text: "1\t0.0\t0.0"
                },
            ]
        );
    }

    #[test]
    fn marker_must_be_its_own_token() {
        assert!(is_comment("> hello"));
        assert!(is_comment("   >"));
        assert!(!is_comment(">hello"));
        assert!(!is_comment("1\t>\t2"));
    }

    #[test]
    fn padded_fields() {
        let line = Line {
            number: 1,
            text: "3\t        1\t        2\t       -1\r",
        };
        assert_eq!(line.fields(), vec!["3", "1", "2", "-1"]);
        assert_eq!(
            line.exact_fields(3),
            Err(FormatErrorKind::FieldCount {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn edge_tabs_delimit_fields() {
        let line = |text| Line { number: 1, text };
        assert_eq!(line("  1\t0\t0\t").fields(), vec!["1", "0", "0", ""]);
        assert_eq!(line("\t1\t0\t0").fields(), vec!["", "1", "0", "0"]);
        assert_eq!(line(" 1\t0\t0 \r").fields(), vec!["1", "0", "0"]);
    }

    #[test]
    fn keywords() {
        let line = |text| Line { number: 1, text };
        assert_eq!(line("BOUNDARY 1 4").keyword(), Some("BOUNDARY"));
        assert_eq!(line("1\t2\t3").keyword(), None);
        assert_eq!(line("Nodes 3").keyword(), None);
    }
}
