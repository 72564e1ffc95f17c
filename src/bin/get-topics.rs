// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use topical::{
    logging,
    path::{expand_path, write_paths},
    platform::{self, Platform},
    topic::TopicResolver,
};

use anyhow::Result;
use clap::Parser;
use std::{
    io::{stderr, stdout, Write},
    path::PathBuf,
    process::exit,
};
use tracing::error;

/// Shells with topic files of their own.
const KNOWN_SHELLS: [&str; 3] = ["bash", "zsh", "sh"];

/// Print ordered listing of topic files to source at shell startup.
#[derive(Debug, Clone, Parser)]
#[command(override_usage = "get-topics [options] <topics_dir> <shell>", version)]
struct Cli {
    /// The top-level topics directory.
    #[arg(value_name = "topics_dir")]
    pub topics_dir: PathBuf,

    /// Return topics appropriate for this shell, e.g., "zsh".
    #[arg(value_name = "shell")]
    pub shell: String,

    /// Separate paths with NUL instead of line breaks.
    #[arg(long)]
    pub print0: bool,

    /// Only return topics needed for a non-interactive shell session.
    #[arg(long)]
    pub non_interactive: bool,

    /// Use topics of this platform instead of the detected one.
    #[arg(long, env = "TOPICAL_PLATFORM", value_name = "platform")]
    pub platform: Option<Platform>,
}

impl Cli {
    fn run(self) -> Result<()> {
        // INVARIANT: Unusual shell warning is shown whatever RUST_LOG says.
        if !KNOWN_SHELLS.contains(&self.shell.as_str()) {
            writeln!(
                stderr(),
                "warning: unusual shell {:?}, supported shells are: {}",
                self.shell,
                KNOWN_SHELLS.join(", ")
            )?;
        }

        let platform = self.platform.unwrap_or_else(platform::detect);
        let resolver = TopicResolver::new(expand_path(&self.topics_dir), self.shell.as_str(), platform)?;
        let paths = resolver.resolve(self.non_interactive)?;

        // INVARIANT: Emit nothing until every path is known.
        let separator = if self.print0 { b'\0' } else { b'\n' };
        let mut output = Vec::new();
        write_paths(&mut output, &paths, separator)?;

        let mut stdout = stdout().lock();
        stdout.write_all(&output)?;
        stdout.flush()?;

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
