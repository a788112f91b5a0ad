//! Binary entry point for the `yaml2props` command-line tool.
//!
//! A thin wrapper around the library: parse arguments, run the conversion.

use anyhow::Result;
use clap::Parser;
use yaml2props::cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    yaml2props::cli::run(&args)
}
