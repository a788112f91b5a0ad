//! Command-line plumbing for the `yaml2props` binary.
//!
//! Argument parsing lives in [`Args`]; [`run`] drives the library pipeline
//! and reports the written path on standard error. All failures propagate as
//! [`anyhow::Error`] and terminate the process non-zero.

use crate::FlattenOptions;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Convert a YAML configuration file into a flat `.properties` file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML document to convert
    pub file: PathBuf,

    /// Write the output here instead of deriving the path from the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sort keys lexicographically at every nesting level
    #[arg(long)]
    pub sort_keys: bool,

    /// Character joining nested key segments
    #[arg(long, default_value_t = '.')]
    pub separator: char,
}

impl Args {
    fn options(&self) -> FlattenOptions {
        let mut options = FlattenOptions::new().with_separator(self.separator);
        if self.sort_keys {
            options = options.with_sorted_keys();
        }
        options
    }
}

/// Runs the conversion described by the parsed arguments.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not a mapping-rooted YAML
/// document, or the output cannot be written.
pub fn run(args: &Args) -> Result<()> {
    let options = args.options();
    let target = match &args.output {
        Some(path) => path.clone(),
        None => crate::output_path(&args.file),
    };

    crate::convert_path_to(&args.file, &target, &options)
        .with_context(|| format!("could not convert {}", args.file.display()))?;

    eprintln!("Properties file generated: {}", target.display());
    Ok(())
}
