// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use topical::{logging, platform};

use anyhow::Result;
use clap::Parser;
use std::{
    io::{stdout, Write},
    process::exit,
};
use tracing::error;

/// Print normalized identifier of the current platform.
///
/// The identifier names the platform-specific directory inside a topics
/// directory, e.g., "darwin", "linux", "wsl", or "mingw".
#[derive(Debug, Clone, Parser)]
#[command(version)]
struct Cli {}

impl Cli {
    fn run(self) -> Result<()> {
        let mut stdout = stdout().lock();
        writeln!(stdout, "{}", platform::detect())?;

        Ok(())
    }
}

fn main() {
    logging::init();

    if let Err(error) = run() {
        error!("{error:?}");
        exit(1);
    }

    exit(0)
}

fn run() -> Result<()> {
    Cli::parse().run()
}
