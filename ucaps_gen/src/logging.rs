// Copyright 2026 the Ucaps Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal `log` backend writing to stderr.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

#[derive(Debug)]
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Nothing useful can be done when stderr itself is gone.
        let _ = writeln!(
            std::io::stderr().lock(),
            "[ucaps_gen][{}] {}",
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs the stderr logger with the given maximum level.
///
/// Fails if another logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Maps the `-v`/`-q` command-line counts to a level: `Info` by default.
pub fn level_from_verbosity(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
