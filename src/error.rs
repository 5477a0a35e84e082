use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a single target could not be measured
#[derive(Error, Debug)]
pub enum TraversalFailure {
    /// `at_root` is set only when the target's own root entry is missing
    #[error("{}: no such file or directory", .path.display())]
    NotFound { path: PathBuf, at_root: bool },

    #[error("{}: {source}", .path.display())]
    Other {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("scan cancelled")]
    Cancelled,

    #[error("scan task ended without a result")]
    Aborted,
}

impl TraversalFailure {
    /// Classify an I/O error raised while querying `path` below the root
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        Self::classify(path, source, false)
    }

    /// Classify an I/O error raised by the first query of a target root
    pub fn from_root_io(path: &Path, source: io::Error) -> Self {
        Self::classify(path, source, true)
    }

    fn classify(path: &Path, source: io::Error, at_root: bool) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
                at_root,
            }
        } else {
            Self::Other {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// True when the target root itself does not exist
    pub fn is_absent_root(&self) -> bool {
        matches!(self, Self::NotFound { at_root: true, .. })
    }
}

/// Invalid target configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("target name must not be empty")]
    EmptyName,

    #[error("duplicate target name: {0}")]
    DuplicateName(String),

    #[error("target path must be absolute: {}", .0.display())]
    RelativePath(PathBuf),

    #[error("invalid target '{0}', expected NAME=PATH")]
    InvalidSpec(String),

    #[error("could not determine home directory")]
    NoHomeDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_classified() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        let failure = TraversalFailure::from_io(Path::new("/a/b"), err);
        assert!(matches!(failure, TraversalFailure::NotFound { at_root: false, .. }));
        assert!(!failure.is_absent_root());
    }

    #[test]
    fn test_permission_denied_is_other() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        let failure = TraversalFailure::from_root_io(Path::new("/a/b"), err);
        assert!(matches!(failure, TraversalFailure::Other { .. }));
        assert!(!failure.is_absent_root());
    }

    #[test]
    fn test_absent_root_only_from_root_query() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        assert!(TraversalFailure::from_root_io(Path::new("/cache"), err).is_absent_root());
        assert!(!TraversalFailure::Cancelled.is_absent_root());
    }
}
