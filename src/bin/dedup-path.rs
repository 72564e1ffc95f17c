// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use topical::{
    logging,
    path::expand_path,
    search_path::{deduplicate, export_statement},
};

use anyhow::Result;
use clap::Parser;
use std::{
    env::var_os,
    io::{stdout, Write},
    path::PathBuf,
    process::exit,
};
use tracing::{debug, error, warn};

/// Print `PATH` export without duplicate entries.
///
/// Meant to be evaluated as the last step of shell startup:
/// `eval "$(dedup-path)"`.
#[derive(Debug, Clone, Parser)]
#[command(override_usage = "dedup-path [options]", version)]
struct Cli {
    /// A directory to remove from PATH.
    #[arg(long, value_name = "dir")]
    pub remove: Vec<PathBuf>,
}

impl Cli {
    fn run(self) -> Result<()> {
        let Some(original) = var_os("PATH") else {
            warn!("PATH is not set, nothing to deduplicate");
            return Ok(());
        };

        let remove = self.remove.iter().map(expand_path).collect::<Vec<_>>();
        let entries = deduplicate(&original, &remove);
        debug!("keep {} search path entries", entries.len());

        let mut stdout = stdout().lock();
        writeln!(stdout, "{}", export_statement(&entries))?;

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
