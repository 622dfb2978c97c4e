//! PINMAP CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, render the
//! table to a map document, and exit with appropriate status. Invoked with
//! no arguments it reads `./datafiles/data.txt` and writes `index.html` to
//! the working directory. For programmatic use, prefer the library API
//! (`pinmap::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
