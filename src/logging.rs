// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Logging setup shared by all binaries.
//!
//! Standard output belongs to the shell that evaluates or sources what the
//! binaries print. So all diagnostics go to standard error, filtered by
//! `RUST_LOG`, and only warnings and errors show up by default.

use std::io::{stderr, IsTerminal};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install global tracing subscriber writing to standard error.
pub fn init() {
    let layer = fmt::layer()
        .compact()
        .with_writer(stderr)
        .with_ansi(stderr().is_terminal())
        .with_target(false)
        .without_time();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();
}
