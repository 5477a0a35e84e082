//! Filesystem access abstraction
//!
//! Decouples size calculation from `tokio::fs`, so traversal and failure
//! handling can be exercised against scripted trees.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

/// What a single filesystem entry turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file with its apparent size in bytes
    File(u64),
    Dir,
    /// Symlink, socket, device or anything else that holds no bytes of its own
    Other,
}

impl EntryKind {
    fn from_file_type(meta: &std::fs::Metadata) -> Self {
        let file_type = meta.file_type();
        if file_type.is_file() {
            EntryKind::File(meta.len())
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::Other
        }
    }
}

/// Async filesystem queries needed to measure a tree
pub trait Filesystem: Send + Sync + 'static {
    /// Query the entry at `path`. `follow` resolves a symlink at `path` itself.
    fn entry_kind(
        &self,
        path: &Path,
        follow: bool,
    ) -> impl Future<Output = io::Result<EntryKind>> + Send;

    /// List the full paths of the immediate children of a directory
    fn read_dir(&self, path: &Path) -> impl Future<Output = io::Result<Vec<PathBuf>>> + Send;
}

/// The real filesystem, via `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

impl Filesystem for TokioFs {
    async fn entry_kind(&self, path: &Path, follow: bool) -> io::Result<EntryKind> {
        let meta = if follow {
            tokio::fs::metadata(path).await?
        } else {
            tokio::fs::symlink_metadata(path).await?
        };
        Ok(EntryKind::from_file_type(&meta))
    }

    async fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(path).await?;
        let mut children = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            children.push(entry.path());
        }
        Ok(children)
    }
}
