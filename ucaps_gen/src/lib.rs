// Copyright 2026 the Ucaps Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generates simple case-mapping lookup tables from the Unicode Character Database.
//!
//! A run reads `UnicodeData.txt`, collects the simple uppercase and lowercase mapping of every
//! record, and writes a source file declaring two tables (lower to upper, upper to lower) and two
//! lookup functions that return the input unchanged when it has no mapping.
//!
//! The tool is meant to be run by hand whenever the data should be refreshed; it is not part of
//! any build. The `ucaps_gen` binary run without arguments downloads [`UNICODE_DATA_URL`] and
//! overwrites `src/library/string/ucaps.lua` in the working directory; `--input`, `--url`,
//! `--output` and `--format` override the source, destination and [`Format`].
//!
//! ```no_run
//! let summary = ucaps_gen::generate(&ucaps_gen::Config::default())?;
//! println!("{} upper, {} lower", summary.lower_to_upper, summary.upper_to_lower);
//! # Ok::<(), ucaps_gen::Error>(())
//! ```

use std::path::PathBuf;

mod emit;
mod error;
mod extract;
pub mod logging;
mod source;

pub use emit::{render, write, Format};
pub use error::Error;
pub use extract::{extract, CaseMapping, CaseMaps, ParseRecordError, ParseRecordErrorKind};
pub use source::Source;

/// The database snapshot the tables are generated from.
///
/// Pinned so that regenerating yields the same tables for existing consumers.
pub const UNICODE_DATA_URL: &str = "https://www.unicode.org/Public/16.0.0/ucd/UnicodeData.txt";

/// What to read, what to emit and where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The database text.
    pub source: Source,
    /// The file to overwrite.
    pub output: PathBuf,
    /// The language of the emitted table.
    pub format: Format,
}

impl Config {
    /// Creates a configuration writing `format` to its default output path.
    pub fn new(source: Source, format: Format) -> Self {
        Self {
            source,
            output: PathBuf::from(format.default_output()),
            format,
        }
    }
}

impl Default for Config {
    /// Fetches [`UNICODE_DATA_URL`] and writes the Lua module to its default path.
    fn default() -> Self {
        Self::new(
            Source::Remote(UNICODE_DATA_URL.to_owned()),
            Format::default(),
        )
    }
}

/// The outcome of a successful [`generate`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// The file that was written.
    pub output: PathBuf,
    /// Number of lower to upper entries.
    pub lower_to_upper: usize,
    /// Number of upper to lower entries.
    pub upper_to_lower: usize,
}

/// Reads the database, extracts the case mappings and writes the rendered table.
///
/// The whole input is parsed before anything is rendered, so a malformed record leaves the
/// output path untouched.
pub fn generate(config: &Config) -> Result<Summary, Error> {
    let text = config.source.read()?;
    let maps = extract(text.lines())?;
    log::info!(
        "parsed {} lower->upper and {} upper->lower mappings",
        maps.lower_to_upper.len(),
        maps.upper_to_lower.len()
    );

    let contents = render(&maps, config.format);
    log::debug!("rendered {:?} table", config.format);
    write(&config.output, &contents)?;

    Ok(Summary {
        output: config.output.clone(),
        lower_to_upper: maps.lower_to_upper.len(),
        upper_to_lower: maps.upper_to_lower.len(),
    })
}
