// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Topic resolution.
//!
//! A __topic__ is a named unit of shell startup configuration, e.g., "git".
//! A topic is not a single file. It is a potential set of __topic files__,
//! each named `<stem>.<extension>`, that a shell sources at startup.
//!
//! # Topics Directory Layout
//!
//! ```text
//! topics/
//! ├── initial-topics          # optional, sourced first
//! ├── final-topics            # optional, sourced last
//! ├── non-interactive-topics  # optional, subset for non-interactive shells
//! ├── git.sh                  # shell-agnostic topic file
//! ├── git.bash                # shell-specific topic file
//! └── darwin/                 # platform-specific topic root
//!     ├── git.sh
//!     └── git.bash
//! ```
//!
//! Topic files ending in ".sh" work under any POSIX shell, and are always
//! searched for. Shell-specific topic files use the shell's name as their
//! extension. A platform-specific topic root is an immediate child of the
//! general topics root named after the [`Platform`]. It may hold topics that
//! do not exist in the general root at all.
//!
//! # Ordering
//!
//! Topics named by "initial-topics" come first in listed order, then every
//! topic not named by either control file in lexical order, and topics named
//! by "final-topics" come last in listed order. All files of one topic are
//! clumped together. Within a topic, ".sh" files precede shell-specific files,
//! and for each extension the general root precedes the platform root. Thus a
//! platform-specific file never replaces its general counterpart. Both are
//! listed so the shell lets the later one override the earlier.
//!
//! A stem named by both "initial-topics" and "final-topics" only takes part
//! in the initial section.
//!
//! # Non-Interactive Sessions
//!
//! Non-interactive shells need far fewer topics. When a non-interactive
//! session is requested and "non-interactive-topics" exists, only topics it
//! names are returned. Ordering is still decided by the other control files.

pub mod control;
pub mod extension;

use crate::{
    platform::{self, Platform},
    topic::{
        control::{read_topic_stems, ControlFile},
        extension::{ExtensionSpec, Extensions},
    },
};

use glob::{glob_with, MatchOptions, Pattern};
use std::{
    collections::{BTreeSet, HashSet},
    path::{Path, PathBuf},
};
use tracing::{debug, info, instrument, warn};

/// Resolve ordered topic file paths for a shell.
///
/// Convenience wrapper around [`TopicResolver`] using the detected platform.
///
/// # Errors
///
/// - Return any [`TopicError`] that [`TopicResolver::new`] or
///   [`TopicResolver::resolve`] produce.
pub fn resolve(
    topics_root: impl AsRef<Path>,
    extensions: impl Into<ExtensionSpec>,
    non_interactive: bool,
) -> Result<Vec<PathBuf>> {
    TopicResolver::new(topics_root, extensions, platform::detect())?.resolve(non_interactive)
}

/// Resolve topic files of a topics directory.
#[derive(Debug, Clone)]
pub struct TopicResolver {
    root: PathBuf,
    extensions: Extensions,
    platform: Platform,
}

impl TopicResolver {
    /// Construct new topic resolver for target platform.
    ///
    /// Relative topics roots are made absolute against the current directory.
    /// Use [`platform::detect`] to resolve for the current host.
    ///
    /// # Errors
    ///
    /// - Return [`TopicError::NotADirectory`] if the topics root is not an
    ///   existing directory.
    /// - Return [`TopicError::Extension`] if no usable extension was given.
    pub fn new(
        topics_root: impl AsRef<Path>,
        extensions: impl Into<ExtensionSpec>,
        platform: Platform,
    ) -> Result<Self> {
        let topics_root = topics_root.as_ref();
        if !topics_root.is_dir() {
            return Err(TopicError::NotADirectory {
                path: topics_root.to_path_buf(),
            });
        }

        let root = std::path::absolute(topics_root).map_err(|err| TopicError::Absolute {
            source: err,
            path: topics_root.to_path_buf(),
        })?;
        let extensions = Extensions::try_new(extensions)?;

        Ok(Self {
            root,
            extensions,
            platform,
        })
    }

    /// Absolute path of general topics root.
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Normalized extensions searched for.
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// Platform whose topic root is searched.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Determine active topic roots.
    ///
    /// # Errors
    ///
    /// - Return [`TopicError::DuplicateRoot`] if the platform topic root names
    ///   the general topics root itself.
    pub fn topic_roots(&self) -> Result<TopicRoots> {
        let platform_root = self.root.join(self.platform.as_str());
        let platform_root = platform_root.is_dir().then_some(platform_root);
        TopicRoots::new(self.root.clone(), platform_root)
    }

    /// Resolve ordered, duplicate free listing of topic file paths.
    ///
    /// # Errors
    ///
    /// - Return [`TopicError::DuplicateRoot`] if active topic roots overlap.
    /// - Return [`TopicError::Pattern`] or [`TopicError::Scan`] if topic roots
    ///   cannot be scanned.
    /// - Return [`TopicError::Control`] if an existing control file cannot be
    ///   read.
    /// - Return [`TopicError::DuplicatePath`] if a topic file path would be
    ///   listed twice.
    #[instrument(skip(self), fields(root = %self.root.display(), platform = %self.platform), level = "debug")]
    pub fn resolve(&self, non_interactive: bool) -> Result<Vec<PathBuf>> {
        let roots = self.topic_roots()?;
        let mut candidates = find_existing_topic_stems(&roots, &self.extensions)?;
        if candidates.is_empty() {
            info!("no topics found in {}", self.root.display());
            return Ok(Vec::new());
        }

        let non_interactive_file = ControlFile::NonInteractive.path_in(&self.root);
        if non_interactive && non_interactive_file.exists() {
            let limit: HashSet<String> = read_topic_stems(&non_interactive_file, &self.extensions)?
                .into_iter()
                .collect();
            candidates.retain(|stem| limit.contains(stem));
            debug!("limit to non-interactive topics {limit:?}");
        }

        let initial = self.read_listing(ControlFile::Initial, &candidates)?;
        let mut last = self.read_listing(ControlFile::Final, &candidates)?;

        // INVARIANT: Initial listing claims stems named by both control files.
        let claimed: HashSet<&str> = initial.iter().map(String::as_str).collect();
        last.retain(|stem| {
            let keep = !claimed.contains(stem.as_str());
            if !keep {
                warn!("topic {stem:?} listed as both initial and final, keeping it initial");
            }
            keep
        });

        let remaining = candidates
            .iter()
            .filter(|stem| !claimed.contains(stem.as_str()) && !last.contains(stem))
            .map(String::as_str);

        let mut paths = resolve_topic_paths(initial.iter().map(String::as_str), &roots, &self.extensions);
        paths.extend(resolve_topic_paths(remaining, &roots, &self.extensions));
        paths.extend(resolve_topic_paths(last.iter().map(String::as_str), &roots, &self.extensions));

        ensure_unique(&paths)?;
        debug!("resolved {} topic files", paths.len());
        Ok(paths)
    }

    // INVARIANT: Control files only order topics that were found by scanning.
    //   - Entries naming missing or filtered out topics are dropped.
    //   - Entries that are not plain stems, e.g., "linux/git" or "../x", never
    //     match a scanned stem, so they cannot reach outside of a topic root.
    fn read_listing(&self, control: ControlFile, candidates: &BTreeSet<String>) -> Result<Vec<String>> {
        let mut stems = read_topic_stems(control.path_in(&self.root), &self.extensions)?;
        stems.retain(|stem| {
            let keep = candidates.contains(stem);
            if !keep {
                debug!("{control} entry {stem:?} names no topic in scope, skipping it");
            }
            keep
        });
        debug!("{control} lists {stems:?} for extensions {}", self.extensions);

        Ok(stems)
    }
}

/// Ensure that no topic file path is listed twice.
///
/// # Errors
///
/// - Return [`TopicError::DuplicatePath`] naming the first repeated path.
pub fn ensure_unique(paths: &[PathBuf]) -> Result<()> {
    let mut seen = HashSet::new();
    match paths.iter().find(|path| !seen.insert(path.as_path())) {
        Some(duplicate) => Err(TopicError::DuplicatePath {
            path: duplicate.clone(),
        }),
        None => Ok(()),
    }
}

/// Active topic roots in search order.
///
/// # Invariant
///
/// - General topics root always comes first.
/// - No topic root is listed twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRoots {
    roots: Vec<PathBuf>,
}

impl TopicRoots {
    /// Construct new listing of topic roots.
    ///
    /// # Errors
    ///
    /// - Return [`TopicError::DuplicateRoot`] if the platform topic root is
    ///   the general topics root.
    pub fn new(general: PathBuf, platform: Option<PathBuf>) -> Result<Self> {
        let mut roots = vec![general];
        if let Some(platform) = platform {
            if roots.contains(&platform) {
                return Err(TopicError::DuplicateRoot { path: platform });
            }
            roots.push(platform);
        }

        Ok(Self { roots })
    }

    /// Iterate topic roots in search order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }
}

/// Find stems of every topic file that exists in any topic root.
///
/// Hidden files are ignored.
///
/// # Errors
///
/// - Return [`TopicError::Pattern`] if a search pattern cannot be built.
/// - Return [`TopicError::Scan`] if a topic root cannot be read.
pub fn find_existing_topic_stems(roots: &TopicRoots, extensions: &Extensions) -> Result<BTreeSet<String>> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut stems = BTreeSet::new();
    for root in roots.iter() {
        let root_pattern = Pattern::escape(root.to_str().ok_or_else(|| TopicError::NonUtf8Root {
            path: root.to_path_buf(),
        })?);
        for extension in extensions {
            let pattern = format!("{root_pattern}/*.{}", Pattern::escape(extension));
            for entry in glob_with(&pattern, options)? {
                let path = entry?;
                if !path.is_file() {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    stems.insert(stem.to_owned());
                } else {
                    warn!("skip topic file with non UTF-8 name {}", path.display());
                }
            }
        }
    }

    debug!("found topics {stems:?}");
    Ok(stems)
}

/// Resolve topic stems to existing topic file paths.
///
/// Iterates stems, then extensions, then topic roots, keeping each
/// `<root>/<stem>.<extension>` that is an existing file. All files of a topic
/// end up next to each other in the order given by `extensions` and `roots`.
pub fn resolve_topic_paths<'a>(
    stems: impl IntoIterator<Item = &'a str>,
    roots: &TopicRoots,
    extensions: &Extensions,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for stem in stems {
        for extension in extensions {
            for root in roots.iter() {
                let path = root.join(format!("{stem}.{extension}"));
                if path.is_file() {
                    paths.push(path);
                }
            }
        }
    }

    paths
}

/// Topic resolution error types.
#[derive(Debug, thiserror::Error)]
pub enum TopicError {
    /// Topics root is not an existing directory.
    #[error("topics root {:?} is not an existing directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Topics root cannot be made absolute.
    #[error("failed to make topics root {:?} absolute", path.display())]
    Absolute {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// No usable extension requested.
    #[error(transparent)]
    Extension(#[from] crate::topic::extension::NoUsableExtension),

    /// Same directory listed twice as a topic root.
    #[error("topic root {:?} listed more than once", path.display())]
    DuplicateRoot { path: PathBuf },

    /// Same topic file path resolved twice.
    #[error("topic file {:?} resolved more than once", path.display())]
    DuplicatePath { path: PathBuf },

    /// Topic root path cannot be turned into a search pattern.
    #[error("topic root {:?} is not valid UTF-8", path.display())]
    NonUtf8Root { path: PathBuf },

    /// Search pattern is invalid.
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// Topic root cannot be scanned.
    #[error(transparent)]
    Scan(#[from] glob::GlobError),

    /// Control file cannot be read.
    #[error(transparent)]
    Control(#[from] crate::topic::control::Error),
}

/// Friendly result alias :3
pub type Result<T, E = TopicError> = std::result::Result<T, E>;
