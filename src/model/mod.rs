mod event;
mod target;

pub use event::{ScanEvent, ScanReport, SizeResult, TargetFailure};
pub use target::{Target, TargetSet};
