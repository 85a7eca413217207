//! oncall - Determine if a user is currently on call
//!
//! Exit code 0 if on call, 1 if not, 2 on error.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use clap::Parser;
use std::process::ExitCode;

use pincidents::driver::{exit, workflow, OnCallArgs};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let args = OnCallArgs::parse();

    exit::finish(workflow::run_oncall(args).await)
}
