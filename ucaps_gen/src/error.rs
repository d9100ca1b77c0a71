// Copyright 2026 the Ucaps Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use crate::ParseRecordError;

/// Any failure of a generation run. None of them are recovered from.
#[derive(Debug)]
pub enum Error {
    /// A helper program could not be started.
    Spawn {
        /// Name of the program.
        program: &'static str,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The download exited unsuccessfully.
    Fetch {
        /// The requested URL.
        url: String,
        /// Exit code of the download, if it exited normally.
        code: Option<i32>,
        /// Diagnostics written by the download.
        stderr: String,
    },
    /// A local input file could not be read.
    Read {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The downloaded text is not valid UTF-8.
    Utf8 {
        /// Where the text came from.
        origin: String,
        /// The decoding error.
        source: FromUtf8Error,
    },
    /// A database record is malformed.
    Record(ParseRecordError),
    /// The output file could not be written.
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, .. } => write!(f, "failed to run `{program}`"),
            Self::Fetch { url, code, stderr } => {
                write!(f, "failed to fetch {url}")?;
                if let Some(code) = code {
                    write!(f, " (exit code {code})")?;
                }
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
            Self::Read { path, .. } => write!(f, "failed to read '{}'", path.display()),
            Self::Utf8 { origin, .. } => write!(f, "{origin} is not valid UTF-8"),
            Self::Record(err) => write!(f, "malformed record at {err}"),
            Self::Write { path, .. } => write!(f, "failed to write '{}'", path.display()),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } | Self::Read { source, .. } | Self::Write { source, .. } => {
                Some(source)
            }
            Self::Utf8 { source, .. } => Some(source),
            Self::Fetch { .. } | Self::Record(_) => None,
        }
    }
}

impl From<ParseRecordError> for Error {
    fn from(err: ParseRecordError) -> Self {
        Self::Record(err)
    }
}
