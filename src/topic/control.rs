// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Control file handling.
//!
//! The general topics root may contain three plain text files that steer
//! resolution: "initial-topics", "final-topics", and "non-interactive-topics".
//! Each lists one topic stem per line. None of them have to exist, and an
//! existing file may be empty. Both cases mean that no topic takes part in
//! that category.

use crate::topic::extension::Extensions;

use std::{
    collections::HashSet,
    fmt::{Display, Formatter, Result as FmtResult},
    fs::read_to_string,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Control file kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlFile {
    /// Topics sourced before everything else, in listed order.
    Initial,

    /// Topics sourced after everything else, in listed order.
    Final,

    /// Only topics a non-interactive shell session needs. Order is ignored.
    NonInteractive,
}

impl ControlFile {
    /// Name of control file inside the general topics root.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Initial => "initial-topics",
            Self::Final => "final-topics",
            Self::NonInteractive => "non-interactive-topics",
        }
    }

    /// Absolute path of control file for target topics root.
    pub fn path_in(self, topics_root: impl AsRef<Path>) -> PathBuf {
        topics_root.as_ref().join(self.file_name())
    }
}

impl Display for ControlFile {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.file_name())
    }
}

/// Read line-oriented listing.
///
/// A missing file yields an empty listing.
///
/// # Errors
///
/// - Return [`Error::Read`] if the file exists but cannot be read.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    match read_to_string(path) {
        Ok(content) => Ok(content.lines().map(str::to_owned).collect()),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no listing at {}", path.display());
            Ok(Vec::new())
        }
        Err(err) => Err(Error::Read {
            source: err,
            path: path.to_path_buf(),
        }),
    }
}

/// Read topic stems from a control file.
///
/// Surrounding whitespace and blank lines are ignored, and one trailing
/// extension in scope is stripped from each entry. Repeated stems keep their
/// first position.
///
/// # Errors
///
/// - Return [`Error::Read`] if the file exists but cannot be read.
pub fn read_topic_stems(path: impl AsRef<Path>, extensions: &Extensions) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let stems = read_lines(path)?
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| extensions.strip_from(line).to_owned())
        .filter(|stem| seen.insert(stem.clone()))
        .collect();

    Ok(stems)
}

/// Control file error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Control file exists but cannot be read.
    #[error("failed to read control file at {:?}", path.display())]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

/// Friendly result alias :3
pub type Result<T, E = Error> = std::result::Result<T, E>;
