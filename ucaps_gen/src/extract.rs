// Copyright 2026 the Ucaps Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simple case mappings extracted from `UnicodeData.txt`.
//!
//! Each record of the database is a line of `;`-separated fields. Only three of them matter here:
//! the code point (field 0), the simple uppercase mapping (field 12) and the simple lowercase
//! mapping (field 13).
//!
//! <https://www.unicode.org/reports/tr44/#UnicodeData.txt>

use core::fmt;

const CODE_POINT_FIELD: usize = 0;
const UPPERCASE_FIELD: usize = 12;
const LOWERCASE_FIELD: usize = 13;
/// A record must reach the lowercase mapping field to be usable.
const MIN_FIELDS: usize = LOWERCASE_FIELD + 1;

/// A single `(code point, mapped code point)` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CaseMapping {
    /// The code point the record describes.
    pub code_point: u32,
    /// The code point it maps to.
    pub mapping: u32,
}

impl CaseMapping {
    /// Creates a new mapping from `code_point` to `mapping`.
    pub const fn new(code_point: u32, mapping: u32) -> Self {
        Self {
            code_point,
            mapping,
        }
    }
}

/// Both directions of the simple case mappings, in source order.
///
/// The two tables are independent: the database does not guarantee that a mapping in one
/// direction has a reciprocal entry in the other (titlecase letters such as U+01C5 map to
/// different code points in each direction).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseMaps {
    /// Records with a non-empty simple uppercase mapping.
    pub lower_to_upper: Vec<CaseMapping>,
    /// Records with a non-empty simple lowercase mapping.
    pub upper_to_lower: Vec<CaseMapping>,
}

impl CaseMaps {
    /// Returns the uppercase mapping of `ch`, or `ch` itself when it has none.
    pub fn to_upper(&self, ch: u32) -> u32 {
        lookup(&self.lower_to_upper, ch)
    }

    /// Returns the lowercase mapping of `ch`, or `ch` itself when it has none.
    pub fn to_lower(&self, ch: u32) -> u32 {
        lookup(&self.upper_to_lower, ch)
    }
}

fn lookup(table: &[CaseMapping], ch: u32) -> u32 {
    table
        .iter()
        .find(|m| m.code_point == ch)
        .map_or(ch, |m| m.mapping)
}

/// The kind of [`ParseRecordError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseRecordErrorKind {
    /// The record ends before the lowercase mapping field.
    MissingFields {
        /// Number of fields actually present.
        found: usize,
    },
    /// A consumed field is not a hexadecimal code point.
    InvalidHex {
        /// Index of the offending field.
        field: usize,
        /// The trimmed field text.
        value: String,
    },
}

/// An error returned when a database record cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRecordError {
    line: usize,
    kind: ParseRecordErrorKind,
}

impl ParseRecordError {
    const fn new(line: usize, kind: ParseRecordErrorKind) -> Self {
        Self { line, kind }
    }

    /// Returns the 1-based line number of the offending record.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &ParseRecordErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParseRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseRecordErrorKind::MissingFields { found } => write!(
                f,
                "line {}: expected at least {MIN_FIELDS} fields, found {found}",
                self.line
            ),
            ParseRecordErrorKind::InvalidHex { field, value } => write!(
                f,
                "line {}: field {field} is not a hexadecimal code point: {value:?}",
                self.line
            ),
        }
    }
}

impl core::error::Error for ParseRecordError {}

/// Collects the simple case mappings of every record in `lines`.
///
/// Parsing is strict: the first malformed record aborts extraction, no line is skipped.
pub fn extract<I, S>(lines: I) -> Result<CaseMaps, ParseRecordError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut maps = CaseMaps::default();
    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let (code_point, upper, lower) = parse_record(line.as_ref(), line_number)?;
        if let Some(upper) = upper {
            maps.lower_to_upper.push(CaseMapping::new(code_point, upper));
        }
        if let Some(lower) = lower {
            maps.upper_to_lower.push(CaseMapping::new(code_point, lower));
        }
    }
    log::debug!(
        "extracted {} lower->upper and {} upper->lower mappings",
        maps.lower_to_upper.len(),
        maps.upper_to_lower.len()
    );
    Ok(maps)
}

/// Returns the code point and the optional uppercase and lowercase mappings of one record.
fn parse_record(
    line: &str,
    line_number: usize,
) -> Result<(u32, Option<u32>, Option<u32>), ParseRecordError> {
    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return Err(ParseRecordError::new(
            line_number,
            ParseRecordErrorKind::MissingFields {
                found: fields.len(),
            },
        ));
    }

    let code_point = parse_hex(fields[CODE_POINT_FIELD], CODE_POINT_FIELD, line_number)?;
    let upper = parse_mapping(fields[UPPERCASE_FIELD], UPPERCASE_FIELD, line_number)?;
    let lower = parse_mapping(fields[LOWERCASE_FIELD], LOWERCASE_FIELD, line_number)?;
    log::trace!("line {line_number}: {code_point:04X} upper={upper:04X?} lower={lower:04X?}");
    Ok((code_point, upper, lower))
}

fn parse_mapping(
    value: &str,
    field: usize,
    line_number: usize,
) -> Result<Option<u32>, ParseRecordError> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_hex(value, field, line_number).map(Some)
}

fn parse_hex(value: &str, field: usize, line_number: usize) -> Result<u32, ParseRecordError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    let invalid = || {
        ParseRecordError::new(
            line_number,
            ParseRecordErrorKind::InvalidHex {
                field,
                value: value.to_owned(),
            },
        )
    };
    // `from_str_radix` tolerates a leading sign, which is never part of a code point.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u32::from_str_radix(digits, 16).map_err(|_| invalid())
}
