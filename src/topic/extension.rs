// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Topic file extensions.
//!
//! Callers may hand over a single extension or a whole listing of them. Either
//! way, the request is normalized into [`Extensions`] before any topic root is
//! scanned, so the resolver only ever sees one canonical form.

use std::{
    collections::HashSet,
    fmt::{Display, Formatter, Result as FmtResult},
    slice::Iter,
};

/// Extension of topics that work under any POSIX shell.
pub const SHELL_AGNOSTIC: &str = "sh";

/// Requested extensions as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionSpec {
    /// Exactly one extension, e.g., "bash".
    One(String),

    /// Ordered listing of extensions.
    Many(Vec<String>),
}

impl From<&str> for ExtensionSpec {
    fn from(extension: &str) -> Self {
        Self::One(extension.to_owned())
    }
}

impl From<String> for ExtensionSpec {
    fn from(extension: String) -> Self {
        Self::One(extension)
    }
}

impl From<Vec<String>> for ExtensionSpec {
    fn from(extensions: Vec<String>) -> Self {
        Self::Many(extensions)
    }
}

impl From<Vec<&str>> for ExtensionSpec {
    fn from(extensions: Vec<&str>) -> Self {
        Self::Many(extensions.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ExtensionSpec {
    fn from(extensions: [&str; N]) -> Self {
        Self::Many(extensions.into_iter().map(str::to_owned).collect())
    }
}

/// Normalized listing of extensions in search order.
///
/// # Invariant
///
/// - Never empty, and [`SHELL_AGNOSTIC`] is always the first entry.
/// - No entry is empty or starts with a dot.
/// - No duplicate entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions(Vec<String>);

impl Extensions {
    /// Normalize requested extensions.
    ///
    /// Leading dots are stripped, empty and dot-only entries are dropped, and
    /// duplicates are removed keeping their first occurrence. The shell-agnostic
    /// extension is then forced to the front.
    ///
    /// # Errors
    ///
    /// - Return [`NoUsableExtension`] if the request does not name at least
    ///   one usable extension.
    pub fn try_new(spec: impl Into<ExtensionSpec>) -> Result<Self> {
        let requested = match spec.into() {
            ExtensionSpec::One(extension) => vec![extension],
            ExtensionSpec::Many(extensions) => extensions,
        };

        if !requested.iter().any(|extension| is_usable(extension)) {
            return Err(NoUsableExtension);
        }

        let mut seen = HashSet::new();
        let mut extensions = Vec::new();
        let candidates = std::iter::once(SHELL_AGNOSTIC).chain(requested.iter().map(String::as_str));
        for extension in candidates.filter(|extension| is_usable(extension)) {
            let extension = extension.trim_start_matches('.');
            if seen.insert(extension) {
                extensions.push(extension.to_owned());
            }
        }

        Ok(Self(extensions))
    }

    /// Iterate extensions in search order.
    pub fn iter(&self) -> Iter<'_, String> {
        self.0.iter()
    }

    /// Check if extension is in scope.
    pub fn contains(&self, extension: &str) -> bool {
        self.0.iter().any(|known| known == extension)
    }

    /// Strip one trailing extension in scope from a topic name.
    ///
    /// Names without such an extension are returned as is, so "git.sh" and
    /// "git" both yield "git".
    pub fn strip_from<'a>(&self, name: &'a str) -> &'a str {
        match name.rsplit_once('.') {
            Some((stem, extension)) if !stem.is_empty() && self.contains(extension) => stem,
            _ => name,
        }
    }
}

impl<'a> IntoIterator for &'a Extensions {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Extensions {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.0.join(", ").as_str())
    }
}

fn is_usable(extension: &str) -> bool {
    !extension.trim_start_matches('.').is_empty()
}

/// No usable filename extension was requested.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("at least one non-empty filename extension must be given")]
pub struct NoUsableExtension;

/// Friendly result alias :3
pub type Result<T, E = NoUsableExtension> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case(ExtensionSpec::from("bash"), "sh, bash"; "single shell")]
    #[test_case(ExtensionSpec::from(".zsh"), "sh, zsh"; "leading dot stripped")]
    #[test_case(ExtensionSpec::from("sh"), "sh"; "agnostic only")]
    #[test_case(ExtensionSpec::from(["zsh", "sh"]), "sh, zsh"; "agnostic forced first")]
    #[test_case(ExtensionSpec::from(["bash", ".bash", "..bash"]), "sh, bash"; "duplicates after stripping")]
    #[test_case(ExtensionSpec::from(["", ".", "zsh", "bash"]), "sh, zsh, bash"; "unusable entries dropped")]
    #[test]
    fn extensions_normalize(spec: ExtensionSpec, expect: &str) {
        let result = Extensions::try_new(spec).unwrap();
        assert_eq!(result.to_string(), expect);
    }

    #[test_case(ExtensionSpec::from(""); "empty string")]
    #[test_case(ExtensionSpec::from("."); "dot only")]
    #[test_case(ExtensionSpec::from(".."); "dots only")]
    #[test_case(ExtensionSpec::Many(Vec::new()); "empty listing")]
    #[test_case(ExtensionSpec::from(["", "."]); "nothing usable in listing")]
    #[test]
    fn extensions_reject_unusable_request(spec: ExtensionSpec) {
        assert_eq!(Extensions::try_new(spec), Err(NoUsableExtension));
    }

    #[test]
    fn extensions_strip_known_suffix_only() -> anyhow::Result<()> {
        let extensions = Extensions::try_new("bash")?;
        assert_eq!(extensions.strip_from("git.sh"), "git");
        assert_eq!(extensions.strip_from("git.bash"), "git");
        assert_eq!(extensions.strip_from("git.zsh"), "git.zsh");
        assert_eq!(extensions.strip_from("git"), "git");
        assert_eq!(extensions.strip_from(".sh"), ".sh");
        Ok(())
    }
}
