// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cacheinfo::scanner::{EntryKind, Filesystem};
use tempfile::TempDir;

/// Write `files` (relative path, size) under a fresh temp directory
pub fn create_tree(files: &[(&str, usize)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, size) in files {
        let full_path = dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, vec![b'x'; *size]).unwrap();
    }
    dir
}

/// Absolute path inside the scripted filesystem's namespace
pub fn vpath(rel: &str) -> PathBuf {
    std::env::temp_dir().join("cacheinfo-virtual").join(rel)
}

#[derive(Debug, Clone)]
enum Node {
    File(u64),
    Dir(Vec<PathBuf>),
}

/// In-memory filesystem whose paths can be delayed, stalled or made to fail
#[derive(Debug, Default)]
pub struct ScriptedFs {
    nodes: HashMap<PathBuf, Node>,
    read_dir_errors: HashMap<PathBuf, io::ErrorKind>,
    vanished: HashSet<PathBuf>,
    delays: HashMap<PathBuf, Duration>,
    stalled: HashSet<PathBuf>,
    panics: HashSet<PathBuf>,
}

impl ScriptedFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and any missing ancestors
    pub fn dir(mut self, path: &Path) -> Self {
        self.insert_dir(path);
        self
    }

    /// Add a file of `size` bytes, creating its parent directories
    pub fn file(mut self, path: &Path, size: u64) -> Self {
        if let Some(parent) = path.parent() {
            self.insert_dir(parent);
            self.link(parent, path);
        }
        self.nodes.insert(path.to_path_buf(), Node::File(size));
        self
    }

    /// Listing `path` fails with `kind`
    pub fn fail_read_dir(mut self, path: &Path, kind: io::ErrorKind) -> Self {
        self.read_dir_errors.insert(path.to_path_buf(), kind);
        self
    }

    /// `path` shows up in its parent's listing but is gone when queried
    pub fn vanish(mut self, path: &Path) -> Self {
        if let Some(parent) = path.parent() {
            self.insert_dir(parent);
            self.link(parent, path);
        }
        self.vanished.insert(path.to_path_buf());
        self
    }

    /// Every query on `path` waits `delay` first
    pub fn delay(mut self, path: &Path, delay: Duration) -> Self {
        self.delays.insert(path.to_path_buf(), delay);
        self
    }

    /// Every query on `path` never completes
    pub fn stall(mut self, path: &Path) -> Self {
        self.stalled.insert(path.to_path_buf());
        self
    }

    /// Every query on `path` panics
    pub fn panic_on(mut self, path: &Path) -> Self {
        self.panics.insert(path.to_path_buf());
        self
    }

    fn insert_dir(&mut self, path: &Path) {
        if self.nodes.contains_key(path) {
            return;
        }
        self.nodes.insert(path.to_path_buf(), Node::Dir(Vec::new()));
        if let Some(parent) = path.parent() {
            self.insert_dir(parent);
            self.link(parent, path);
        }
    }

    fn link(&mut self, parent: &Path, child: &Path) {
        if let Some(Node::Dir(children)) = self.nodes.get_mut(parent) {
            if !children.iter().any(|c| c == child) {
                children.push(child.to_path_buf());
            }
        }
    }

    async fn before_query(&self, path: &Path) {
        if let Some(delay) = self.delays.get(path) {
            tokio::time::sleep(*delay).await;
        }
        if self.stalled.contains(path) {
            std::future::pending::<()>().await;
        }
        if self.panics.contains(path) {
            panic!("scripted panic at {}", path.display());
        }
    }
}

impl Filesystem for ScriptedFs {
    async fn entry_kind(&self, path: &Path, _follow: bool) -> io::Result<EntryKind> {
        self.before_query(path).await;
        if self.vanished.contains(path) {
            return Err(io::ErrorKind::NotFound.into());
        }
        match self.nodes.get(path) {
            Some(Node::File(size)) => Ok(EntryKind::File(*size)),
            Some(Node::Dir(_)) => Ok(EntryKind::Dir),
            None => Err(io::ErrorKind::NotFound.into()),
        }
    }

    async fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        self.before_query(path).await;
        if let Some(kind) = self.read_dir_errors.get(path) {
            return Err((*kind).into());
        }
        match self.nodes.get(path) {
            Some(Node::Dir(children)) => Ok(children.clone()),
            Some(Node::File(_)) => Err(io::ErrorKind::NotADirectory.into()),
            None => Err(io::ErrorKind::NotFound.into()),
        }
    }
}
