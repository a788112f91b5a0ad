//! Error types for YAML-to-properties conversion.
//!
//! This module provides the crate's error enum, covering the three fatal
//! failure kinds of the conversion pipeline plus the structural check on
//! the document root:
//!
//! - **Read errors**: input file missing or unreadable
//! - **Parse errors**: input is not well-formed YAML, or the top level is not a mapping
//! - **Write errors**: output path unwritable
//!
//! None of these is recoverable; the CLI surfaces them directly and exits
//! non-zero.
//!
//! ## Examples
//!
//! ```rust
//! use yaml2props::{from_str, Error};
//!
//! let result = from_str("- just\n- a\n- list");
//! assert!(matches!(result, Err(Error::RootNotMapping { .. })));
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents all possible errors that can occur while converting a YAML
/// document to properties output.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not well-formed YAML.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed, but its top level is not a mapping.
    #[error("expected a mapping at the document root, found {found}")]
    RootNotMapping { found: &'static str },

    /// The output file could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An I/O failure with no file path involved, e.g. a caller-supplied writer.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Creates a read error for the given input path.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a write error for the given output path.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
