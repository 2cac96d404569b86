use std::io::BufRead;

use serde::Serialize;

use super::error::{ParseError, ParseWarning, WarningKind};
use super::model::{Coordinate, Neighbourhood, NeighbourhoodMap};

/// Separator between pairs on a bracketed multi-coordinate line.
const PAIR_SEPARATOR: &str = "), (";
/// Separator between the two numbers of a pair.
const VALUE_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// Options / result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Assign a sequential index (from 1) on every name line.
    pub track_index: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { track_index: true }
    }
}

/// Parsed neighbourhoods plus everything that was skipped on the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseReport {
    pub neighbourhoods: NeighbourhoodMap,
    pub warnings: Vec<ParseWarning>,
}

impl ParseReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Line classification
// ---------------------------------------------------------------------------

/// Shape of a trimmed input line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Blank,
    Comment,
    Name(&'a str),
    /// `[(x, y), (x, y), ...]`
    Multi(&'a str),
    /// `(x, y)`
    Single(&'a str),
    Other,
}

fn classify(line: &str) -> Line<'_> {
    if line.starts_with('#') {
        return Line::Comment;
    }
    match line.chars().next() {
        None => Line::Blank,
        Some(c) if c.is_alphabetic() => Line::Name(line),
        Some('[') => Line::Multi(line),
        Some('(') => Line::Single(line),
        Some(_) => Line::Other,
    }
}

/// Read `x, y` into a coordinate. Tokens past the second are ignored.
fn parse_pair(text: &str) -> Option<Coordinate> {
    let mut values = text.split(VALUE_SEPARATOR);
    let x = values.next()?.trim().parse::<f64>().ok()?;
    let y = values.next()?.trim().parse::<f64>().ok()?;
    Some(Coordinate::new(x, y))
}

fn strip_parens(text: &str) -> &str {
    text.trim_matches(|c| c == '(' || c == ')')
}

fn strip_brackets(text: &str) -> &str {
    text.trim_matches(|c| c == '[' || c == ']')
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse a neighbourhood coordinate file.
///
/// Each name line opens (or resets) an entry; the coordinate lines that
/// follow are appended to it. Pairs and lines that fail numeric conversion
/// are skipped and recorded in [`ParseReport::warnings`]. A coordinate line
/// before the first name line aborts with [`ParseError::Structure`].
pub fn parse_neighbourhoods<R: BufRead>(
    reader: R,
    options: &ParseOptions,
) -> Result<ParseReport, ParseError> {
    let mut map = NeighbourhoodMap::new();
    let mut warnings = Vec::new();
    let mut current: Option<String> = None;
    let mut next_index: usize = 1;

    for (i, raw) in reader.lines().enumerate() {
        let raw = raw?;
        let line_no = i + 1;
        let line = raw.trim();

        match classify(line) {
            Line::Blank | Line::Comment | Line::Other => {}
            Line::Name(name) => {
                let mut index = None;
                if options.track_index {
                    index = Some(next_index);
                    next_index += 1;
                }
                if map.reset(name, Neighbourhood::new(index)) {
                    warn(&mut warnings, line_no, name, WarningKind::DuplicateName);
                }
                current = Some(name.to_string());
            }
            Line::Multi(text) => {
                let entry = current_entry(&mut map, current.as_deref(), line_no, line)?;
                for pair in strip_brackets(text).split(PAIR_SEPARATOR) {
                    let pair = strip_parens(pair);
                    match parse_pair(pair) {
                        Some(coord) => entry.coordinates.push(coord),
                        None => warn(&mut warnings, line_no, pair, WarningKind::InvalidPair),
                    }
                }
            }
            Line::Single(text) => {
                let entry = current_entry(&mut map, current.as_deref(), line_no, line)?;
                match parse_pair(strip_parens(text)) {
                    Some(coord) => entry.coordinates.push(coord),
                    None => warn(&mut warnings, line_no, text, WarningKind::InvalidLine),
                }
            }
        }
    }

    log::debug!(
        "parsed {} neighbourhoods ({} coordinates, {} warnings)",
        map.len(),
        map.coordinate_count(),
        warnings.len()
    );
    Ok(ParseReport {
        neighbourhoods: map,
        warnings,
    })
}

fn current_entry<'a>(
    map: &'a mut NeighbourhoodMap,
    current: Option<&str>,
    line: usize,
    text: &str,
) -> Result<&'a mut Neighbourhood, ParseError> {
    current
        .and_then(|name| map.get_mut(name))
        .ok_or_else(|| ParseError::Structure {
            line,
            text: text.to_string(),
        })
}

fn warn(warnings: &mut Vec<ParseWarning>, line: usize, text: &str, kind: WarningKind) {
    let warning = ParseWarning {
        line,
        text: text.to_string(),
        kind,
    };
    log::warn!("{warning}");
    warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    fn parse(input: &str) -> Result<ParseReport, ParseError> {
        parse_neighbourhoods(input.as_bytes(), &ParseOptions::default())
    }

    fn coords(report: &ParseReport, name: &str) -> Vec<(f64, f64)> {
        let entry = report.neighbourhoods.get(name).unwrap();
        entry.coordinates.iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn single_coordinate_lines() {
        let report = parse("Zone\n(1.0, 2.0)\n(3.0, 4.0)\n").unwrap();
        let zone = report.neighbourhoods.get("Zone").unwrap();
        assert_eq!(zone.index, Some(1));
        assert_eq!(coords(&report, "Zone"), vec![(1.0, 2.0), (3.0, 4.0)]);
        assert!(!report.has_warnings());
    }

    #[test]
    fn bracketed_line_matches_single_lines() {
        let single = parse("Zone\n(1.0, 2.0)\n(3.0, 4.0)\n").unwrap();
        let multi = parse("Zone\n[(1.0, 2.0), (3.0, 4.0)]\n").unwrap();
        assert_eq!(single, multi);
    }

    #[test]
    fn bad_single_line_is_skipped_with_warning() {
        let report = parse("Zone\n(bad, 2.0)\n(3.0, 4.0)\n").unwrap();
        assert_eq!(report.neighbourhoods.get("Zone").unwrap().index, Some(1));
        assert_eq!(coords(&report, "Zone"), vec![(3.0, 4.0)]);
        assert_eq!(
            report.warnings,
            vec![ParseWarning {
                line: 2,
                text: "(bad, 2.0)".to_string(),
                kind: WarningKind::InvalidLine,
            }]
        );
    }

    #[test]
    fn bad_pair_in_bracketed_line_skips_only_that_pair() {
        let input = "Zone\n[(1.0, 2.0), (x, 4.0), (5.0,6.0), (7.0, 8.0)]\n";
        let report = parse(input).unwrap();
        assert_eq!(coords(&report, "Zone"), vec![(1.0, 2.0), (7.0, 8.0)]);

        let skipped: Vec<_> = report.warnings.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(skipped, vec!["x, 4.0", "5.0,6.0"]);
        for warning in &report.warnings {
            assert_eq!(warning.kind, WarningKind::InvalidPair);
            assert_eq!(warning.line, 2);
        }
    }

    #[test]
    fn coordinates_before_any_name_fail() {
        let err = parse("(1.0, 2.0)\n").unwrap_err();
        match err {
            ParseError::Structure { line, text } => {
                assert_eq!(line, 1);
                assert_eq!(text, "(1.0, 2.0)");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = parse("# header\n\n  [(1.0, 2.0)]\nZone\n").unwrap_err();
        assert!(matches!(err, ParseError::Structure { line: 3, .. }));
    }

    #[test]
    fn unconvertible_coordinates_before_any_name_still_fail() {
        let err = parse("[(bad, x)]\nZone\n").unwrap_err();
        assert!(matches!(err, ParseError::Structure { line: 1, .. }));

        let err = parse("(bad, x)\nZone\n").unwrap_err();
        assert!(matches!(err, ParseError::Structure { line: 1, .. }));
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let input: &[u8] = b"Zone\n(1.0, 2.0)\n\xff\xfe\n";
        let options = ParseOptions::default();
        let err = parse_neighbourhoods(input, &options).unwrap_err();
        match err {
            ParseError::Io(e) => assert_eq!(e.kind(), ErrorKind::InvalidData),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn comments_do_not_change_current_name() {
        let report = parse("Zone\n# Other\n(1.0, 2.0)\n#(9.0, 9.0)\n").unwrap();
        assert_eq!(report.neighbourhoods.len(), 1);
        assert_eq!(coords(&report, "Zone"), vec![(1.0, 2.0)]);
    }

    #[test]
    fn index_advances_on_every_name_line() {
        let report = parse("A\n(0.0, 0.0)\nB\nA\nC\n").unwrap();
        let map = &report.neighbourhoods;
        assert_eq!(map.get("A").unwrap().index, Some(3));
        assert_eq!(map.get("B").unwrap().index, Some(2));
        assert_eq!(map.get("C").unwrap().index, Some(4));
    }

    #[test]
    fn repeated_name_resets_coordinates_and_warns() {
        let input = "Old Town\n(1.0, 1.0)\nNew Town\n(2.0, 2.0)\nOld Town\n(3.0, 3.0)\n";
        let report = parse(input).unwrap();
        let names: Vec<_> = report.neighbourhoods.names().collect();
        assert_eq!(names, vec!["Old Town", "New Town"]);
        assert_eq!(coords(&report, "Old Town"), vec![(3.0, 3.0)]);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].kind, WarningKind::DuplicateName);
        assert_eq!(report.warnings[0].line, 5);
    }

    #[test]
    fn index_tracking_can_be_disabled() {
        let options = ParseOptions { track_index: false };
        let input = "A\n(1.0, 2.0)\nB\n";
        let report = parse_neighbourhoods(input.as_bytes(), &options).unwrap();
        for (_, entry) in report.neighbourhoods.iter() {
            assert_eq!(entry.index, None);
        }
        assert_eq!(report.neighbourhoods.coordinate_count(), 1);
    }

    #[test]
    fn surrounding_whitespace_and_unknown_lines_are_ignored() {
        let input = concat!(
            "   Marchmont  \n",
            "\t(1.5, -2.5)   \n",
            "\n",
            "42 stray\n",
            "* bullet\n",
            "( 3.0 ,  4.0)\n",
            "  (5.0,6.0)\n",
        );
        let report = parse(input).unwrap();
        assert_eq!(coords(&report, "Marchmont"), vec![(1.5, -2.5), (3.0, 4.0)]);
        // no space after the comma
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].text, "(5.0,6.0)");
    }

    #[test]
    fn pair_with_one_value_is_skipped() {
        let report = parse("Zone\n(5.0)\n[(1.0, 2.0), (6.0)]\n").unwrap();
        assert_eq!(coords(&report, "Zone"), vec![(1.0, 2.0)]);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn underscore_separators_are_not_numbers() {
        let report = parse("Zone\n(1_000.0, 2.0)\n").unwrap();
        assert!(coords(&report, "Zone").is_empty());
        assert_eq!(report.warnings[0].kind, WarningKind::InvalidLine);
    }

    #[test]
    fn reparsing_is_idempotent() {
        let input = concat!(
            "# Edinburgh\n",
            "Leith\n",
            "[(325000.5, 676000.0), (325100.0, 676050.25)]\n",
            "Portobello\n",
            "(330000.0, 673000.0)\n",
            "(bad, 1.0)\n",
        );
        let first = parse(input).unwrap();
        let second = parse(input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn classify_lines() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("# comment"), Line::Comment);
        assert_eq!(classify("Église"), Line::Name("Église"));
        assert_eq!(classify("[(1, 2)]"), Line::Multi("[(1, 2)]"));
        assert_eq!(classify("(1, 2)"), Line::Single("(1, 2)"));
        assert_eq!(classify("12 Street"), Line::Other);
    }
}
