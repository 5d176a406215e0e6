//! CLI entry point for grid line-of-sight queries

use clap::Parser;
use gridsight::io::cli::{Cli, run};

// The report line is the program's output
#[allow(clippy::print_stdout)]
fn main() -> gridsight::Result<()> {
    let cli = Cli::parse();
    let report = run(&cli)?;
    println!("{report}");
    Ok(())
}
