// Library crate exposing modules for the binary and integration tests

pub mod error;
pub mod model;
pub mod output;
pub mod scanner;
pub mod targets;
pub mod util;
