// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Path representation utilities.
//!
//! Everything printed for the shell uses POSIX path notation, whatever the
//! host. Git Bash for Windows is the odd one out here. Inside a Git Bash
//! session paths look like `/c/Users/wolf/bin`, but a native program sees
//! `C:\Users\wolf\bin`. Git Bash translates between both forms for `PATH`
//! only, so anything else handed back to the shell must already be in the
//! POSIX form.

use std::{
    io::{Result as IoResult, Write},
    path::{Path, PathBuf},
};

/// Convert host path into its POSIX form.
///
/// On Windows hosts the path is rewritten with [`windows_to_posix`]. Anywhere
/// else it is only normalized: repeated separators, inner "." components, and
/// trailing separators are dropped.
pub fn posix_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if cfg!(windows) {
        PathBuf::from(windows_to_posix(&path.to_string_lossy()))
    } else {
        path.components().collect()
    }
}

/// Rewrite Windows style path into POSIX form.
///
/// A drive letter becomes the first directory, e.g., `C:\Users\x` becomes
/// `/c/Users/x`. Runs of backslashes and slashes collapse into a single slash,
/// and a trailing separator is dropped.
pub fn windows_to_posix(path: &str) -> String {
    let joined = match split_drive(path) {
        Some((letter, rest)) => format!("/{}/{rest}", letter.to_ascii_lowercase()),
        None => path.to_owned(),
    };

    let mut posix = String::with_capacity(joined.len());
    for ch in joined.chars() {
        let ch = if ch == '\\' { '/' } else { ch };
        if ch == '/' && posix.ends_with('/') {
            continue;
        }
        posix.push(ch);
    }

    if posix.len() > 1 && posix.ends_with('/') {
        posix.pop();
    }

    posix
}

fn split_drive(path: &str) -> Option<(char, &str)> {
    let mut chars = path.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => Some((letter, chars.as_str())),
        _ => None,
    }
}

/// Expand leading tilde of a path argument to the user's home directory.
///
/// Paths that are not valid UTF-8 are returned untouched.
pub fn expand_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Write paths in POSIX form joined by a separator.
///
/// No separator follows the last path. Bytes of each path are written as is.
///
/// # Errors
///
/// - Return [`std::io::Error`] if writing fails.
pub fn write_paths(
    out: &mut impl Write,
    paths: impl IntoIterator<Item = impl AsRef<Path>>,
    separator: u8,
) -> IoResult<()> {
    for (index, path) in paths.into_iter().enumerate() {
        if index > 0 {
            out.write_all(&[separator])?;
        }
        out.write_all(posix_path(path).as_os_str().as_encoded_bytes())?;
    }

    Ok(())
}
