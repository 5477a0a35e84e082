//! Rendering of scan events for the terminal

use serde::Serialize;

use crate::model::{SizeResult, TargetFailure};
use crate::util::format_size;

#[derive(Serialize)]
struct JsonError<'a> {
    name: &'a str,
    error: String,
}

/// `name<TAB>size` for a finished target
pub fn text_result(result: &SizeResult) -> String {
    format!("{}\t{}", result.name, format_size(result.size))
}

/// `name: error` for a failed target
pub fn text_error(failure: &TargetFailure) -> String {
    format!("{}: {}", failure.name, failure.failure)
}

pub fn json_result(result: &SizeResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}

pub fn json_error(failure: &TargetFailure) -> serde_json::Result<String> {
    serde_json::to_string(&JsonError {
        name: &failure.name,
        error: failure.failure.to_string(),
    })
}
