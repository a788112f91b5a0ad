//! # yaml2props
//!
//! Convert hierarchical YAML configuration into flat Java-style `.properties`
//! files, flattening nested mappings via dot-separated key paths.
//!
//! ## What it does
//!
//! Given a YAML document:
//!
//! ```yaml
//! server:
//!   host: localhost
//!   port: 8080
//! debug: true
//! ```
//!
//! the crate produces:
//!
//! ```text
//! server.host=localhost
//! server.port=8080
//! debug=true
//! ```
//!
//! ## Key Features
//!
//! - **Deterministic output**: document order is preserved via insertion-ordered
//!   mappings, so the same input always produces the same output
//! - **Single canonical representation**: every mapping key is coerced to a
//!   string at parse time, no matter how YAML typed it
//! - **Safe single-line values**: scalars are stripped of control characters
//!   and trimmed before emission
//! - **Configurable**: custom key separators and per-level key sorting via
//!   [`FlattenOptions`]
//! - **No Unsafe Code**: written entirely in safe Rust with zero unsafe blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! yaml2props = "0.1"
//! ```
//!
//! ### Converting a string
//!
//! ```rust
//! use yaml2props::{from_str, to_string};
//!
//! let doc = from_str("a: 1\nb:\n  c: 2\n  d:\n    e: 3").unwrap();
//! assert_eq!(to_string(&doc), "a=1\nb.c=2\nb.d.e=3\n");
//! ```
//!
//! ### Converting a file
//!
//! ```rust,no_run
//! use yaml2props::{convert_path, FlattenOptions};
//!
//! let written = convert_path("config.yaml".as_ref(), &FlattenOptions::new()).unwrap();
//! assert_eq!(written.to_str(), Some("config.properties"));
//! ```
//!
//! ### Dynamic documents with the yaml! macro
//!
//! ```rust
//! use yaml2props::{yaml, Value};
//!
//! let data = yaml!({
//!     "name": "Alice",
//!     "limits": { "cpu": 2, "memory": "1Gi" }
//! });
//!
//! if let Value::Mapping(doc) = data {
//!     assert_eq!(yaml2props::to_string(&doc), "name=Alice\nlimits.cpu=2\nlimits.memory=1Gi\n");
//! }
//! ```
//!
//! ## Command-line tool
//!
//! The crate ships a binary of the same name:
//!
//! ```text
//! yaml2props config.yaml              # writes config.properties
//! yaml2props config.yaml -o out.props # explicit output path
//! yaml2props config.yaml --sort-keys  # lexicographic key order
//! ```
//!
//! ## Format notes
//!
//! See the [`format`] module for the full output format rules, including the
//! known fidelity gaps (no `\=`/`\:`/unicode escaping, sequences rendered
//! inline rather than as indexed keys).

pub mod cli;
pub mod error;
pub mod flatten;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod value;

pub use error::{Error, Result};
pub use flatten::{flatten, normalize, FlatEntry};
pub use map::Mapping;
pub use options::FlattenOptions;
pub use value::{Number, Value};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Parse a YAML string into a document mapping.
///
/// The top level of the document must be a mapping. An empty document (or an
/// explicit `null` document) is accepted and treated as an empty mapping,
/// which flattens to empty output.
///
/// # Examples
///
/// ```rust
/// use yaml2props::from_str;
///
/// let doc = from_str("server:\n  port: 8080").unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::Yaml`] if the input is not well-formed YAML, and
/// [`Error::RootNotMapping`] if the document parses but its top level is a
/// scalar or a sequence.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Mapping> {
    let value: Value = serde_yaml::from_str(s)?;
    match value {
        Value::Mapping(doc) => Ok(doc),
        Value::Null => Ok(Mapping::new()),
        other => Err(Error::RootNotMapping {
            found: other.kind(),
        }),
    }
}

/// Flatten a document to properties text with default options.
///
/// One `key=value` line per leaf scalar, every line `\n`-terminated, document
/// order preserved. An empty document produces an empty string.
///
/// # Examples
///
/// ```rust
/// use yaml2props::{from_str, to_string};
///
/// let doc = from_str("a: 1\nb:\n  c: 2").unwrap();
/// assert_eq!(to_string(&doc), "a=1\nb.c=2\n");
/// ```
#[must_use]
pub fn to_string(doc: &Mapping) -> String {
    to_string_with_options(doc, &FlattenOptions::default())
}

/// Flatten a document to properties text with custom options.
///
/// # Examples
///
/// ```rust
/// use yaml2props::{from_str, to_string_with_options, FlattenOptions};
///
/// let doc = from_str("b: 2\na: 1").unwrap();
/// let options = FlattenOptions::sorted();
/// assert_eq!(to_string_with_options(&doc, &options), "a=1\nb=2\n");
/// ```
#[must_use]
pub fn to_string_with_options(doc: &Mapping, options: &FlattenOptions) -> String {
    flatten::render(&flatten(doc, options))
}

/// Flatten a document and write the properties text to a writer.
///
/// # Examples
///
/// ```rust
/// use yaml2props::{from_str, to_writer};
///
/// let doc = from_str("a: 1").unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"a=1\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, doc: &Mapping) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, doc, &FlattenOptions::default())
}

/// Flatten a document and write the properties text to a writer with custom
/// options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    doc: &Mapping,
    options: &FlattenOptions,
) -> Result<()>
where
    W: io::Write,
{
    let rendered = to_string_with_options(doc, options);
    writer.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Derive the output path for an input path.
///
/// The input's extension is replaced by `properties`; an extensionless input
/// gains the extension.
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
/// use yaml2props::output_path;
///
/// assert_eq!(output_path(Path::new("config.yaml")), Path::new("config.properties"));
/// assert_eq!(output_path(Path::new("app.yml")), Path::new("app.properties"));
/// assert_eq!(output_path(Path::new("settings")), Path::new("settings.properties"));
/// ```
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("properties")
}

/// Run the whole pipeline for a file: read, parse, flatten, write.
///
/// The output lands next to the input with the extension replaced by
/// `properties` (see [`output_path`]); the written path is returned.
///
/// # Examples
///
/// ```rust,no_run
/// use yaml2props::{convert_path, FlattenOptions};
///
/// let written = convert_path("config.yaml".as_ref(), &FlattenOptions::new()).unwrap();
/// eprintln!("wrote {}", written.display());
/// ```
///
/// # Errors
///
/// Returns [`Error::Read`] if the input cannot be read, [`Error::Yaml`] or
/// [`Error::RootNotMapping`] if it does not parse to a mapping document, and
/// [`Error::Write`] if the output cannot be written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn convert_path(input: &Path, options: &FlattenOptions) -> Result<PathBuf> {
    let target = output_path(input);
    convert_path_to(input, &target, options)?;
    Ok(target)
}

/// Run the whole pipeline for a file with an explicit output path.
///
/// # Errors
///
/// Same as [`convert_path`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn convert_path_to(input: &Path, output: &Path, options: &FlattenOptions) -> Result<()> {
    let text = fs::read_to_string(input).map_err(|e| Error::read(input, e))?;
    let doc = from_str(&text)?;
    let rendered = to_string_with_options(&doc, options);
    fs::write(output, rendered).map_err(|e| Error::write(output, e))?;
    Ok(())
}
