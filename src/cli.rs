use clap::Parser;
use std::path::PathBuf;

use cacheinfo::scanner::DEFAULT_CONCURRENCY;

#[derive(Parser, Debug)]
#[command(name = "cacheinfo", about = "Report the disk usage of package manager caches")]
pub struct Cli {
    /// Home directory to resolve the built-in cache locations against
    #[arg(long)]
    pub home: Option<PathBuf>,

    /// Extra target to measure, as NAME=PATH (repeatable)
    #[arg(long = "target", value_name = "NAME=PATH")]
    pub targets: Vec<String>,

    /// Only measure the named targets (repeatable)
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// Skip the built-in cache locations
    #[arg(long)]
    pub no_defaults: bool,

    /// Directory entries measured at once per directory
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub concurrency: usize,

    /// Print one JSON object per result
    #[arg(long)]
    pub json: bool,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
