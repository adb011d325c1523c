// crates/usgeo-core/src/record.rs

//! # Record Parser
//!
//! Header-driven parser for the delimited flat-file format the dataset
//! ships in. The first line names the fields; its order defines the
//! positional mapping for every following row. There is no quoting or
//! escaping support, the format does not allow the delimiter inside a
//! field.
//!
//! The default mode is lenient: short rows are filled with empty strings,
//! extra fields are discarded, blank lines produce no record. The data
//! source is externally curated and not fully uniform, so a messy row
//! degrades instead of aborting the load. Strict mode turns an arity
//! mismatch into [`GeoError::MalformedRow`] for environments that require
//! data integrity guarantees.

use crate::error::{GeoError, Result};
use std::collections::HashMap;

/// Parser configuration.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Field delimiter, `|` for the shipped tables.
    pub delimiter: char,
    /// Fail on rows whose field count does not match the header.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            delimiter: '|',
            strict: false,
        }
    }
}

/// A single row of source data: a mapping from field name to string value.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Value for `field`, or `""` when the field is absent.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// Value for `field`, or `None` when the header did not name it.
    pub fn get_opt(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Number of fields carried by this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An ordered sequence of [`Record`]s sharing one header.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    header: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Parse `content` leniently with the given delimiter.
    ///
    /// Lenient parsing cannot fail on malformed rows; it degrades with
    /// empty-string fill and silent discard instead.
    pub fn parse(content: &str, delimiter: char) -> RecordSet {
        let opts = ParseOptions {
            delimiter,
            strict: false,
        };
        // Lenient mode never produces an error.
        Self::parse_with(content, &opts).expect("lenient parse is infallible")
    }

    /// Parse `content` according to `opts`.
    ///
    /// The first line is the header: split by the delimiter, trimmed fields
    /// become the field names. Each subsequent line maps position `i` to
    /// header field `i`. In strict mode an arity mismatch fails with
    /// [`GeoError::MalformedRow`]; line numbers are 1-based and count the
    /// header.
    pub fn parse_with(content: &str, opts: &ParseOptions) -> Result<RecordSet> {
        let mut lines = content.lines();

        let header: Vec<String> = match lines.next() {
            Some(line) => line
                .split(opts.delimiter)
                .map(|f| f.trim().to_string())
                .collect(),
            None => {
                return Ok(RecordSet {
                    header: Vec::new(),
                    records: Vec::new(),
                })
            }
        };

        let mut records = Vec::new();
        for (idx, line) in lines.enumerate() {
            if line.is_empty() {
                continue;
            }
            let values: Vec<&str> = line.split(opts.delimiter).collect();
            if values.len() != header.len() {
                if opts.strict {
                    return Err(GeoError::MalformedRow {
                        line: idx + 2,
                        expected: header.len(),
                        found: values.len(),
                    });
                }
                tracing::debug!(
                    line = idx + 2,
                    expected = header.len(),
                    found = values.len(),
                    "row arity mismatch, filling/discarding"
                );
            }

            let mut fields = HashMap::with_capacity(header.len());
            for (i, name) in header.iter().enumerate() {
                // Missing trailing fields map to "", extra fields are dropped.
                let value = values.get(i).copied().unwrap_or("");
                fields.insert(name.clone(), value.to_string());
            }
            records.push(Record { fields });
        }

        Ok(RecordSet { header, records })
    }

    /// The header fields, in source order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The parsed records, in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the set, keeping only the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Serialize back to delimited text with the original header order.
    ///
    /// For well-formed input (every row carrying exactly the header's
    /// fields, newline-terminated) this reproduces the parsed content
    /// byte-identically.
    pub fn to_delimited(&self, delimiter: char) -> String {
        let mut out = String::new();
        let delim = delimiter.to_string();
        out.push_str(&self.header.join(&delim));
        out.push('\n');
        for record in &self.records {
            let row: Vec<&str> = self.header.iter().map(|f| record.get(f)).collect();
            out.push_str(&row.join(&delim));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITIES: &str = "\
City|State short|State full
Troy|NY|New York
Albany|NY|New York
";

    #[test]
    fn parses_header_and_rows() {
        let set = RecordSet::parse(CITIES, '|');
        assert_eq!(set.header(), &["City", "State short", "State full"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[0].get("City"), "Troy");
        assert_eq!(set.records()[1].get("State full"), "New York");
    }

    #[test]
    fn header_fields_are_trimmed() {
        let set = RecordSet::parse("City | State short \nTroy|NY\n", '|');
        assert_eq!(set.header(), &["City", "State short"]);
        assert_eq!(set.records()[0].get("State short"), "NY");
    }

    #[test]
    fn short_rows_fill_with_empty_strings() {
        let set = RecordSet::parse("a|b|c\n1|2\n", '|');
        let rec = &set.records()[0];
        assert_eq!(rec.get("a"), "1");
        assert_eq!(rec.get("b"), "2");
        assert_eq!(rec.get("c"), "");
    }

    #[test]
    fn extra_fields_are_discarded() {
        let set = RecordSet::parse("a|b\n1|2|3|4\n", '|');
        let rec = &set.records()[0];
        assert_eq!(rec.get("a"), "1");
        assert_eq!(rec.get("b"), "2");
        assert_eq!(rec.len(), 2);
    }

    #[test]
    fn trailing_newline_produces_no_record() {
        let set = RecordSet::parse("a|b\n1|2\n\n", '|');
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unknown_field_lookup_is_empty() {
        let set = RecordSet::parse(CITIES, '|');
        assert_eq!(set.records()[0].get("Population"), "");
        assert_eq!(set.records()[0].get_opt("Population"), None);
    }

    #[test]
    fn empty_content_yields_empty_set() {
        let set = RecordSet::parse("", '|');
        assert!(set.is_empty());
        assert!(set.header().is_empty());
    }

    #[test]
    fn strict_mode_rejects_short_rows() {
        let opts = ParseOptions {
            delimiter: '|',
            strict: true,
        };
        let err = RecordSet::parse_with("a|b|c\n1|2\n", &opts).unwrap_err();
        match err {
            GeoError::MalformedRow {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn strict_mode_accepts_well_formed_input() {
        let opts = ParseOptions {
            delimiter: '|',
            strict: true,
        };
        let set = RecordSet::parse_with(CITIES, &opts).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn round_trip_is_byte_identical_for_well_formed_input() {
        let set = RecordSet::parse(CITIES, '|');
        assert_eq!(set.to_delimited('|'), CITIES);
    }

    #[test]
    fn alternate_delimiter() {
        let set = RecordSet::parse("a;b\n1;2\n", ';');
        assert_eq!(set.records()[0].get("b"), "2");
        assert_eq!(set.to_delimited(';'), "a;b\n1;2\n");
    }
}
