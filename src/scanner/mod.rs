//! Size aggregation engine
//!
//! # Architecture
//!
//! - **fs**: Filesystem query trait and the `tokio::fs` implementation
//! - **size**: Recursive per-path size calculation
//! - **aggregator**: Per-target fan-out, failure classification, completion tracking
//! - **sink**: Push-style event delivery
//! - **stream**: Pull-style event delivery

mod aggregator;
mod fs;
mod sink;
mod size;
mod stream;

pub use aggregator::{Aggregator, Outcome};
pub use fs::{EntryKind, Filesystem, TokioFs};
pub use sink::{CallbackSink, EventSink};
pub use size::{DEFAULT_CONCURRENCY, ScanOptions, SizeCalculator};
pub use stream::ScanStream;
