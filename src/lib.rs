// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Shell startup helpers.
//!
//! Topical keeps shell startup files organized as __topics__: small shell
//! fragments grouped by subject, e.g., "git" or "path", that live in one
//! topics directory. At startup the shell asks for the ordered listing of
//! topic files to source, and sources them one by one. See [`topic`] for
//! how that listing is put together.
//!
//! Along with topic resolution, topical ships the bits that resolution
//! depends on or that shell startup needs anyway: platform detection,
//! POSIX path rendering for Git Bash for Windows, and `PATH` cleanup.

pub mod logging;
pub mod path;
pub mod platform;
pub mod search_path;
pub mod topic;

pub use platform::{detect as detect_platform, Platform};
pub use topic::{resolve as resolve_topics, TopicError, TopicResolver};
