//! symslice CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the slicer, and exit
//! with a non-zero status on the first failure.
//! For programmatic use, prefer the library API (`symslice::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
