mod cli;
mod logging;
mod progress;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use cacheinfo::model::{ScanEvent, Target, TargetSet};
use cacheinfo::output;
use cacheinfo::scanner::{Aggregator, ScanOptions};
use cacheinfo::targets;
use cli::Cli;
use progress::{IndicatifProgress, NoopProgress, ProgressReporter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let targets = match build_targets(&cli) {
        Ok(targets) => targets,
        Err(err) => {
            eprintln!("error: {:#}", err);
            return ExitCode::from(2);
        }
    };

    match scan(&cli, targets).await {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            tracing::info!(failed, "some targets could not be measured");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

/// Built-in locations plus `--target` extras, filtered by `--only`
fn build_targets(cli: &Cli) -> Result<TargetSet> {
    let mut set = if cli.no_defaults {
        TargetSet::default()
    } else {
        targets::default_targets(cli.home.clone()).context("Could not resolve cache locations")?
    };

    for spec in &cli.targets {
        let target = Target::parse_spec(spec)?;
        set.push(target)?;
    }

    if !cli.only.is_empty() {
        for name in set.retain_named(&cli.only) {
            tracing::warn!(target_name = %name, "--only names no known target");
        }
    }
    Ok(set)
}

/// Stream results to stdout; returns the number of failed targets
async fn scan(cli: &Cli, targets: TargetSet) -> Result<usize> {
    let reporter: Box<dyn ProgressReporter> = if cli.no_progress || cli.json {
        Box::new(NoopProgress)
    } else {
        Box::new(IndicatifProgress)
    };
    let pb = reporter.start("Scanning");

    let aggregator = Aggregator::new(ScanOptions {
        concurrency: cli.concurrency,
    });
    let mut stream = aggregator.run(targets);
    let mut failed = 0;

    while let Some(event) = stream.next_event().await {
        pb.inc(1);
        match event {
            ScanEvent::Size(result) => {
                let line = if cli.json {
                    output::json_result(&result)?
                } else {
                    output::text_result(&result)
                };
                pb.write_line(&line);
            }
            ScanEvent::Error(failure) => {
                failed += 1;
                if cli.json {
                    pb.write_line(&output::json_error(&failure)?);
                } else {
                    pb.write_error(&output::text_error(&failure));
                }
            }
            ScanEvent::Done => {}
        }
    }

    pb.finish();
    Ok(failed)
}
