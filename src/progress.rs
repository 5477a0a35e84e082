//! Progress reporting abstraction
//!
//! Keeps the scan loop in `main` independent of indicatif.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A handle to an active progress display
pub trait ProgressHandle: Send + Sync {
    fn inc(&self, n: u64);
    /// Print a line to stdout without garbling the display
    fn write_line(&self, line: &str);
    /// Print a line to stderr without garbling the display
    fn write_error(&self, line: &str);
    fn finish(&self);
}

/// Factory for creating progress handles
pub trait ProgressReporter {
    fn start(&self, label: &str) -> Box<dyn ProgressHandle>;
}

/// Indicatif spinner on stderr
pub struct IndicatifProgress;

impl ProgressReporter for IndicatifProgress {
    fn start(&self, label: &str) -> Box<dyn ProgressHandle> {
        // Absent caches never report, so there is no meaningful length
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(&format!(
                    "{{spinner:.green}} {}: {{pos}} reported ({{elapsed}})",
                    label
                ))
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Box::new(IndicatifHandle(pb))
    }
}

struct IndicatifHandle(ProgressBar);

impl ProgressHandle for IndicatifHandle {
    fn inc(&self, n: u64) {
        self.0.inc(n);
    }

    fn write_line(&self, line: &str) {
        self.0.suspend(|| println!("{}", line));
    }

    fn write_error(&self, line: &str) {
        self.0.suspend(|| eprintln!("{}", line));
    }

    fn finish(&self) {
        self.0.finish_and_clear();
    }
}

/// No progress display, lines go straight to stdout
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&self, _label: &str) -> Box<dyn ProgressHandle> {
        Box::new(NoopHandle)
    }
}

struct NoopHandle;

impl ProgressHandle for NoopHandle {
    fn inc(&self, _n: u64) {}

    fn write_line(&self, line: &str) {
        println!("{}", line);
    }

    fn write_error(&self, line: &str) {
        eprintln!("{}", line);
    }

    fn finish(&self) {}
}
