//! export-incidents - Export PagerDuty incident history as CSV

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use clap::Parser;
use std::process::ExitCode;

use pincidents::driver::{exit, workflow, ExportArgs};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let args = ExportArgs::parse();

    exit::finish(workflow::run_export(args).await)
}
