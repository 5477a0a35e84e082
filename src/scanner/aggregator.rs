//! Concurrent fan-out of size calculations across targets

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::error::TraversalFailure;
use crate::model::{ScanEvent, SizeResult, Target, TargetFailure};

use super::fs::{Filesystem, TokioFs};
use super::sink::EventSink;
use super::size::{ScanOptions, SizeCalculator};
use super::stream::ScanStream;

/// Terminal state of one target
#[derive(Debug)]
pub enum Outcome {
    Succeeded(u64),
    /// The target's root does not exist; nothing is reported
    SkippedAbsent,
    Failed(TraversalFailure),
}

impl Outcome {
    /// Decide skip-vs-report for a target's measurement
    pub fn classify(result: Result<u64, TraversalFailure>) -> Self {
        match result {
            Ok(size) => Outcome::Succeeded(size),
            Err(failure) if failure.is_absent_root() => Outcome::SkippedAbsent,
            Err(failure) => Outcome::Failed(failure),
        }
    }
}

/// Measures a set of targets concurrently and streams their sizes
pub struct Aggregator<F = TokioFs> {
    calculator: Arc<SizeCalculator<F>>,
    cancel: CancellationToken,
}

impl Aggregator<TokioFs> {
    pub fn new(options: ScanOptions) -> Self {
        Self::from_calculator(SizeCalculator::new(options))
    }
}

impl<F: Filesystem> Aggregator<F> {
    pub fn from_calculator(calculator: SizeCalculator<F>) -> Self {
        Self {
            calculator: Arc::new(calculator),
            cancel: CancellationToken::new(),
        }
    }

    /// Token that cancels every run started by this aggregator
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Start measuring `targets` and return the stream of their outcomes.
    ///
    /// Must be called from within a tokio runtime.
    pub fn run(&self, targets: impl IntoIterator<Item = Target>) -> ScanStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = self.run_with(targets, tx);
        ScanStream::new(rx, cancel)
    }

    /// Start measuring `targets`, pushing every event into `sink`.
    ///
    /// `ScanEvent::Done` is emitted exactly once, after every target has
    /// produced its outcome. The returned token cancels only this run.
    pub fn run_with(
        &self,
        targets: impl IntoIterator<Item = Target>,
        sink: impl EventSink,
    ) -> CancellationToken {
        let targets: Vec<Target> = targets.into_iter().collect();
        let sink: Arc<dyn EventSink> = Arc::new(sink);
        let cancel = self.cancel.child_token();

        debug!(targets = targets.len(), "starting scan");
        if targets.is_empty() {
            sink.emit(ScanEvent::Done);
            return cancel;
        }

        let outstanding = Arc::new(Outstanding {
            remaining: AtomicUsize::new(targets.len()),
            sink: Arc::clone(&sink),
        });

        for target in targets {
            let mut completion = Completion {
                name: target.name().to_string(),
                outstanding: Arc::clone(&outstanding),
                resolved: false,
            };
            let calculator = Arc::clone(&self.calculator);
            let cancel = cancel.clone();

            tokio::spawn(async move {
                let started = Instant::now();
                debug!(target_name = target.name(), path = %target.path().display(), "measuring");
                let result = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Err(TraversalFailure::Cancelled),
                    result = calculator.measure_until(target.path(), &cancel) => result,
                };
                let outcome = Outcome::classify(result);
                debug!(target_name = target.name(), elapsed = ?started.elapsed(), "resolved");
                completion.resolve(outcome);
            });
        }

        cancel
    }
}

/// Count of targets that have not reached a terminal outcome
struct Outstanding {
    remaining: AtomicUsize,
    sink: Arc<dyn EventSink>,
}

impl Outstanding {
    fn complete_one(&self) {
        if self.remaining.fetch_sub(1, Ordering::AcqRel) == 1 {
            debug!("all targets resolved");
            self.sink.emit(ScanEvent::Done);
        }
    }
}

/// Resolves one target exactly once, even if its task unwinds
struct Completion {
    name: String,
    outstanding: Arc<Outstanding>,
    resolved: bool,
}

impl Completion {
    fn resolve(&mut self, outcome: Outcome) {
        self.resolved = true;
        let sink = &self.outstanding.sink;
        match outcome {
            Outcome::Succeeded(size) => sink.emit(ScanEvent::Size(SizeResult {
                name: self.name.clone(),
                size,
            })),
            Outcome::SkippedAbsent => trace!(target_name = %self.name, "root absent, skipped"),
            Outcome::Failed(failure) => {
                debug!(target_name = %self.name, error = %failure, "scan failed");
                sink.emit(ScanEvent::Error(TargetFailure {
                    name: self.name.clone(),
                    failure,
                }));
            }
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if !self.resolved {
            self.resolve(Outcome::Failed(TraversalFailure::Aborted));
        }
        self.outstanding.complete_one();
    }
}
