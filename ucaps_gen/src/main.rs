// Copyright 2026 the Ucaps Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small CLI that refreshes the generated case-mapping table.
//! With no arguments it downloads the pinned `UnicodeData.txt` and overwrites
//! `src/library/string/ucaps.lua` relative to the working directory.

use std::error::Error as _;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use ucaps_gen::{logging, Config, Format, Source, UNICODE_DATA_URL};

/// Generate simple case-mapping tables from the Unicode Character Database.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Read a local copy of `UnicodeData.txt` instead of downloading it.
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    input: Option<PathBuf>,
    /// Download from this URL instead of the pinned snapshot.
    #[arg(long)]
    url: Option<String>,
    /// File to overwrite [default: depends on the format].
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Language of the generated table.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
    /// Log more detail; repeat for per-record tracing.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> Config {
        let source = match (self.input, self.url) {
            (Some(path), _) => Source::File(path),
            (None, Some(url)) => Source::Remote(url),
            (None, None) => Source::Remote(UNICODE_DATA_URL.to_owned()),
        };
        let mut config = Config::new(source, self.format);
        if let Some(output) = self.output {
            config.output = output;
        }
        config
    }
}

fn main() {
    let args = Args::parse();

    if let Err(err) = logging::init(logging::level_from_verbosity(args.verbose, args.quiet)) {
        eprintln!("Failed to install logger: {err}");
        process::exit(1);
    }

    let config = args.into_config();
    match ucaps_gen::generate(&config) {
        Ok(summary) => log::info!(
            "`{}` generated successfully ({} to-upper, {} to-lower entries)",
            summary.output.display(),
            summary.lower_to_upper,
            summary.upper_to_lower
        ),
        Err(err) => {
            log::error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                log::error!("  caused by: {cause}");
                source = cause.source();
            }
            process::exit(1);
        }
    }
}
