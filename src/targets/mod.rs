//! Built-in cache locations and their resolution to targets

mod table;

pub use table::{CACHE_LOCATIONS, CacheLocation};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::model::{Target, TargetSet};

/// Operating systems with their own cache layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
    /// Anything else uses the Linux layout
    Other,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Other,
        }
    }
}

impl CacheLocation {
    /// Home-relative path on `platform`, falling back to the Linux path
    pub fn relative_path(&self, platform: Platform) -> &'static str {
        let specific = match platform {
            Platform::Windows => self.windows,
            Platform::MacOs => self.macos,
            Platform::Linux | Platform::Other => None,
        };
        specific.unwrap_or(self.linux)
    }
}

/// Resolve `locations` against `home` for `platform`
pub fn resolve(
    locations: &[CacheLocation],
    home: &Path,
    platform: Platform,
) -> Result<TargetSet, ConfigError> {
    TargetSet::new(
        locations
            .iter()
            .map(|loc| Target::new(loc.name, home.join(loc.relative_path(platform))))
            .collect::<Result<Vec<_>, _>>()?,
    )
}

/// The built-in targets for this machine
pub fn default_targets(home: Option<PathBuf>) -> Result<TargetSet, ConfigError> {
    let home = home.or_else(dirs::home_dir).ok_or(ConfigError::NoHomeDir)?;
    resolve(CACHE_LOCATIONS, &home, Platform::current())
}
