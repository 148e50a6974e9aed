// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tidydoc::{Args, init_logging, run};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.debug);

    let check = args.check;
    let reports = run(args)?;
    if check && reports.iter().any(tidydoc::SortReport::is_reordered) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
