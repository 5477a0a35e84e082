//! Recursive subtree size calculation

use std::path::{Path, PathBuf};

use futures::future::BoxFuture;
use futures::{FutureExt, StreamExt, TryStreamExt, stream};
use tokio_util::sync::CancellationToken;

use crate::error::TraversalFailure;

use super::fs::{EntryKind, Filesystem, TokioFs};

/// Default number of sibling entries measured at once within one directory
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Tuning knobs for a size calculation
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Sibling entries in flight per directory level, at least 1
    pub concurrency: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Sums the apparent size of every regular file below a path
pub struct SizeCalculator<F = TokioFs> {
    fs: F,
    options: ScanOptions,
}

impl SizeCalculator<TokioFs> {
    pub fn new(options: ScanOptions) -> Self {
        Self::with_fs(TokioFs, options)
    }
}

impl<F: Filesystem> SizeCalculator<F> {
    pub fn with_fs(fs: F, options: ScanOptions) -> Self {
        Self {
            fs,
            options: ScanOptions {
                concurrency: options.concurrency.max(1),
            },
        }
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Total size of `path`.
    ///
    /// The root is resolved through symlinks; entries below it are not, so a
    /// nested symlink counts as zero bytes. The first failure anywhere in the
    /// subtree wins and no partial total is returned. Only a failed query of
    /// the root entry itself yields a `NotFound` with `at_root` set.
    pub async fn measure(&self, path: &Path) -> Result<u64, TraversalFailure> {
        self.measure_until(path, &CancellationToken::new()).await
    }

    /// Like [`measure`](Self::measure), but no new filesystem query is issued
    /// once `cancel` fires; the walk then fails with `Cancelled`.
    pub async fn measure_until(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<u64, TraversalFailure> {
        check_cancelled(cancel)?;
        let kind = self
            .fs
            .entry_kind(path, true)
            .await
            .map_err(|e| TraversalFailure::from_root_io(path, e))?;
        self.measure_kind(path, kind, cancel).await
    }

    fn measure_entry<'a>(
        &'a self,
        path: PathBuf,
        cancel: &'a CancellationToken,
    ) -> BoxFuture<'a, Result<u64, TraversalFailure>> {
        async move {
            check_cancelled(cancel)?;
            let kind = self
                .fs
                .entry_kind(&path, false)
                .await
                .map_err(|e| TraversalFailure::from_io(&path, e))?;
            self.measure_kind(&path, kind, cancel).await
        }
        .boxed()
    }

    async fn measure_kind(
        &self,
        path: &Path,
        kind: EntryKind,
        cancel: &CancellationToken,
    ) -> Result<u64, TraversalFailure> {
        match kind {
            EntryKind::File(len) => Ok(len),
            EntryKind::Other => Ok(0),
            EntryKind::Dir => self.measure_dir(path, cancel).await,
        }
    }

    async fn measure_dir(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<u64, TraversalFailure> {
        check_cancelled(cancel)?;
        let children = self
            .fs
            .read_dir(path)
            .await
            .map_err(|e| TraversalFailure::from_io(path, e))?;

        stream::iter(children)
            .map(|child| self.measure_entry(child, cancel))
            .buffer_unordered(self.options.concurrency)
            .try_fold(0u64, |total, size| async move { Ok(total.saturating_add(size)) })
            .await
    }
}

fn check_cancelled(cancel: &CancellationToken) -> Result<(), TraversalFailure> {
    if cancel.is_cancelled() {
        Err(TraversalFailure::Cancelled)
    } else {
        Ok(())
    }
}
