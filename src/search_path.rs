// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Command search path cleanup.
//!
//! Startup files tend to prepend the same directories to `PATH` more than
//! once, e.g., when a nested shell sources them again. Run
//! `eval "$(dedup-path)"` as the very last step of shell startup to drop the
//! useless repeats.

use crate::path::posix_path;

use std::{
    collections::HashSet,
    env::split_paths,
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Deduplicate search path entries.
///
/// Splits `original` by the host's `PATH` rules, converts every entry into
/// POSIX form, and keeps only the first occurrence of each. Entries matching
/// any path of `remove` are dropped.
pub fn deduplicate(original: &OsStr, remove: &[PathBuf]) -> Vec<PathBuf> {
    let remove: HashSet<PathBuf> = remove.iter().map(posix_path).collect();
    let mut seen = HashSet::new();

    split_paths(original)
        .map(posix_path)
        .filter(|entry| !remove.contains(entry))
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}

/// Render shell statement exporting search path entries.
///
/// Entries are joined by ":" like any POSIX shell expects. The value is
/// double quoted, so '"', '\\', '$', and '`' are escaped.
pub fn export_statement<P: AsRef<Path>>(entries: &[P]) -> String {
    let joined = entries
        .iter()
        .map(|entry| entry.as_ref().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(":");

    let mut quoted = String::with_capacity(joined.len());
    for ch in joined.chars() {
        if matches!(ch, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }

    format!("export PATH=\"{quoted}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[cfg(unix)]
    #[test]
    fn deduplicate_keeps_first_occurrence() {
        let original = OsStr::new("/home/wolf/bin:/usr/bin:/bin:/home/wolf/bin:/usr/bin/:/usr//bin");
        let result = deduplicate(original, &[]);
        let expect: Vec<PathBuf> = ["/home/wolf/bin", "/usr/bin", "/bin"]
            .into_iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(result, expect);
    }

    #[cfg(unix)]
    #[test]
    fn deduplicate_drops_removed_entries() {
        let original = OsStr::new("/opt/tool/bin:/usr/bin:/opt/tool/bin/:/bin");
        let result = deduplicate(original, &[PathBuf::from("/opt/tool/bin/")]);
        let expect: Vec<PathBuf> = ["/usr/bin", "/bin"].into_iter().map(PathBuf::from).collect();
        assert_eq!(result, expect);
    }

    #[test]
    fn deduplicate_empty_search_path() {
        let result = deduplicate(OsStr::new(""), &[]);
        assert!(result.iter().all(|entry| entry.as_os_str().is_empty()));
    }

    #[test]
    fn export_statement_quotes_value() {
        let result = export_statement(&["/usr/bin", "/home/wolf/$odd \"dir\"", "/bin"]);
        assert_eq!(
            result,
            r#"export PATH="/usr/bin:/home/wolf/\$odd \"dir\":/bin""#
        );
    }

    #[test]
    fn export_statement_without_entries() {
        assert_eq!(export_statement::<PathBuf>(&[]), r#"export PATH="""#);
    }
}
