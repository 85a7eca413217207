//! teams - List all the teams to which the API user belongs

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use clap::Parser;
use std::process::ExitCode;

use pincidents::driver::{exit, workflow, TeamsArgs};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let args = TeamsArgs::parse();

    exit::finish(workflow::run_teams(args).await)
}
