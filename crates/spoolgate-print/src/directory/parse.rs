// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Parser for the `key=value;key=value` printer detail lines emitted by
// the Windows enumeration pipeline.
//
// One line per printer. Split on ';' into properties, then on the FIRST
// '=' only, so driver names containing '=' keep their full value. Keys
// and values are stored as-is, no trimming.

use thiserror::Error;
use tracing::warn;

use spoolgate_core::types::PrinterRecord;

/// A property token that has no '=' separator.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed printer property: {token:?}")]
pub struct ParseError {
    pub token: String,
}

/// Parse one detail line into a record.
pub fn parse_record(line: &str) -> Result<PrinterRecord, ParseError> {
    let mut record = PrinterRecord::new();
    for property in line.split(';') {
        let Some((key, value)) = property.split_once('=') else {
            return Err(ParseError {
                token: property.to_string(),
            });
        };
        record.insert(key, value);
    }
    Ok(record)
}

/// Parse a full enumeration dump, one record per non-blank line.
///
/// Malformed lines are logged and skipped; the well-formed remainder is
/// still returned, matching the behaviour POS operators rely on when one
/// driver reports garbage.
pub fn parse_listing(output: &str) -> Vec<PrinterRecord> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match parse_record(line) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(%err, line, "skipping malformed printer line");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_properties_on_semicolon_and_first_equals() {
        let record = parse_record(
            "Name=EPSON TM-T20III;DriverName=EPSON TM-T20III Receipt5;PortName=USB001",
        )
        .expect("parse");

        assert_eq!(record.name(), Some("EPSON TM-T20III"));
        assert_eq!(record.get("DriverName"), Some("EPSON TM-T20III Receipt5"));
        assert_eq!(record.get("PortName"), Some("USB001"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn value_keeps_text_after_the_first_equals() {
        let record = parse_record("Name=HP;Location=Shelf=2").expect("parse");
        assert_eq!(record.get("Location"), Some("Shelf=2"));
    }

    #[test]
    fn empty_value_is_preserved() {
        let record = parse_record("Name=HP;Location=").expect("parse");
        assert_eq!(record.get("Location"), Some(""));
    }

    #[test]
    fn token_without_equals_is_an_error() {
        let err = parse_record("Name=HP;garbage").expect_err("must fail");
        assert_eq!(err.token, "garbage");
    }

    #[test]
    fn listing_skips_blank_and_malformed_lines() {
        let output = "Name=A;PortName=USB001\n\nnot a record\nName=B;PortName=USB002\n";
        let records = parse_listing(output);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), Some("A"));
        assert_eq!(records[1].name(), Some("B"));
    }

    #[test]
    fn listing_of_empty_output_is_empty() {
        assert!(parse_listing("").is_empty());
        assert!(parse_listing("\n  \n").is_empty());
    }
}
