// Copyright 2026 the Ucaps Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;
use std::process::Command;

use crate::Error;

/// Where the `UnicodeData.txt` text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Fetched with a single blocking HTTP(S) GET.
    Remote(String),
    /// A local copy of the database file.
    File(PathBuf),
}

impl Source {
    /// Returns the full text of the database.
    pub fn read(&self) -> Result<String, Error> {
        match self {
            Self::Remote(url) => fetch(url),
            Self::File(path) => {
                log::info!("reading {}", path.display());
                std::fs::read_to_string(path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

/// Downloads `url` with `curl`; no timeout, no retry.
fn fetch(url: &str) -> Result<String, Error> {
    log::info!("fetching {url}");
    let output = Command::new("curl")
        .args(["--fail", "--silent", "--show-error", "--location"])
        .arg(url)
        .output()
        .map_err(|source| Error::Spawn {
            program: "curl",
            source,
        })?;
    if !output.status.success() {
        return Err(Error::Fetch {
            url: url.to_owned(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }
    log::debug!("fetched {} bytes", output.stdout.len());
    String::from_utf8(output.stdout).map_err(|source| Error::Utf8 {
        origin: url.to_owned(),
        source,
    })
}
