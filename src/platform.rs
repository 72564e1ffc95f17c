// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Platform detection.
//!
//! Topic roots may hold a platform-specific subdirectory named after the
//! current platform, e.g., "darwin" or "wsl". The name is the lowercase
//! `uname` style system name, except for a few environments that need their
//! own topics even though they report some other system:
//!
//! - Git Bash for Windows, and other MinGW shells, are "mingw".
//! - Cygwin is "cygwin".
//! - WSL2 reports itself as Linux, but is "wsl".
//!
//! Detection is split in two. [`PlatformProbe`] gathers the raw facts from the
//! host, and [`classify`] turns them into a [`Platform`] without touching the
//! host at all.

use std::{
    convert::Infallible,
    env,
    fmt::{Display, Formatter, Result as FmtResult},
    fs::read_to_string,
    str::FromStr,
};
use tracing::debug;

/// Kernel release of a running Linux kernel, same as `uname -r`.
const KERNEL_RELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

/// Normalized platform identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    /// MinGW shell on Windows, e.g., Git Bash for Windows.
    Mingw,

    /// Cygwin environment.
    Cygwin,

    /// Linux running under WSL2.
    Wsl,

    /// macOS.
    Darwin,

    /// Any other Linux.
    Linux,

    /// Native Windows.
    Windows,

    /// Anything else, by lowercase system name.
    Other(String),
}

impl Platform {
    /// Identifier as used for platform-specific directory names.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mingw => "mingw",
            Self::Cygwin => "cygwin",
            Self::Wsl => "wsl",
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Other(name) => name.as_str(),
        }
    }
}

impl Display for Platform {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.to_lowercase();
        Ok(match name.as_str() {
            "mingw" => Self::Mingw,
            "cygwin" => Self::Cygwin,
            "wsl" => Self::Wsl,
            "darwin" | "macos" => Self::Darwin,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            _ => Self::Other(name),
        })
    }
}

/// Raw facts about the host needed to classify its platform.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlatformProbe {
    /// Value of `MSYSTEM`.
    pub msystem: Option<String>,

    /// Value of `MSYSTEM_CHOST`.
    pub msystem_chost: Option<String>,

    /// Whether `CYGWIN` is set at all.
    pub cygwin: bool,

    /// Value of `TERM`.
    pub term: Option<String>,

    /// Operating system as Rust names it, e.g., "macos".
    pub os: String,

    /// Kernel release, only looked up on Linux.
    pub kernel_release: Option<String>,
}

impl PlatformProbe {
    /// Probe current host.
    pub fn from_host() -> Self {
        let os = env::consts::OS.to_owned();
        let kernel_release = if os == "linux" {
            read_to_string(KERNEL_RELEASE_PATH)
                .ok()
                .map(|release| release.trim().to_owned())
        } else {
            None
        };

        Self {
            msystem: env::var("MSYSTEM").ok(),
            msystem_chost: env::var("MSYSTEM_CHOST").ok(),
            cygwin: env::var_os("CYGWIN").is_some(),
            term: env::var("TERM").ok(),
            os,
            kernel_release,
        }
    }
}

/// Classify probed host facts.
pub fn classify(probe: &PlatformProbe) -> Platform {
    let lowered = |value: &Option<String>| value.as_deref().unwrap_or_default().to_lowercase();

    // INVARIANT: Environment variables win over the reported system.
    //   - MinGW and Cygwin shells run on a Windows host.
    if lowered(&probe.msystem).starts_with("mingw")
        || lowered(&probe.msystem_chost).contains("mingw")
    {
        return Platform::Mingw;
    }

    if probe.cygwin || probe.term.as_deref().unwrap_or_default().starts_with("cygwin") {
        return Platform::Cygwin;
    }

    match probe.os.as_str() {
        "linux" if lowered(&probe.kernel_release).contains("wsl2") => Platform::Wsl,
        "linux" => Platform::Linux,
        "macos" => Platform::Darwin,
        "windows" => Platform::Windows,
        other => Platform::Other(other.to_lowercase()),
    }
}

/// Detect platform of current host.
pub fn detect() -> Platform {
    let probe = PlatformProbe::from_host();
    let platform = classify(&probe);
    debug!("detected platform {platform} from {probe:?}");
    platform
}
