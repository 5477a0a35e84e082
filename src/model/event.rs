use serde::Serialize;

use crate::error::TraversalFailure;

/// The measured size of one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeResult {
    pub name: String,
    pub size: u64,
}

/// A surfaced error, tagged with the target it came from
#[derive(Debug)]
pub struct TargetFailure {
    pub name: String,
    pub failure: TraversalFailure,
}

/// One item of a scan's output sequence
#[derive(Debug)]
pub enum ScanEvent {
    Size(SizeResult),
    Error(TargetFailure),
    /// Every target has reached a terminal outcome
    Done,
}

/// Everything a finished scan produced
#[derive(Debug, Default)]
pub struct ScanReport {
    pub results: Vec<SizeResult>,
    pub errors: Vec<TargetFailure>,
}

impl ScanReport {
    /// Size reported for `name`, if it produced one
    pub fn size_of(&self, name: &str) -> Option<u64> {
        self.results.iter().find(|r| r.name == name).map(|r| r.size)
    }
}
