//! Flattening of nested documents into properties entries.
//!
//! This module is the core of the crate: a recursive walk over a parsed
//! [`Mapping`] that joins nested keys with a separator and emits one
//! [`FlatEntry`] per leaf scalar.
//!
//! ## Overview
//!
//! - **Dotted keys**: each leaf's key is the separator-joined path of
//!   mapping keys from the root to that leaf
//! - **Scalar normalization**: leaf values are rendered to a single safe
//!   line (see [`normalize`])
//! - **Deterministic order**: entries appear in document order, or sorted
//!   per level when [`FlattenOptions::sort_keys`] is set
//!
//! Each recursion level returns its own entry vector and the caller
//! concatenates, so no mutable accumulator is threaded through the walk.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use yaml2props::{from_str, to_string};
//!
//! let doc = from_str("a: 1\nb:\n  c: 2").unwrap();
//! assert_eq!(to_string(&doc), "a=1\nb.c=2\n");
//! ```
//!
//! ## Direct Use
//!
//! ```rust
//! use yaml2props::{flatten, from_str, FlattenOptions};
//!
//! let doc = from_str("server:\n  port: 8080").unwrap();
//! let entries = flatten(&doc, &FlattenOptions::new());
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].key, "server.port");
//! assert_eq!(entries[0].value, "8080");
//! ```

use crate::{FlattenOptions, Mapping, Value};
use std::fmt;

/// A single flattened entry: a separator-joined key path and its
/// normalized scalar value.
///
/// # Examples
///
/// ```rust
/// use yaml2props::FlatEntry;
///
/// let entry = FlatEntry {
///     key: "server.port".to_string(),
///     value: "8080".to_string(),
/// };
/// assert_eq!(entry.to_string(), "server.port=8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatEntry {
    pub key: String,
    pub value: String,
}

impl fmt::Display for FlatEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Flattens a document into a sequence of entries.
///
/// Nested mappings recurse with their key appended to the prefix; every
/// other value is a leaf and is normalized with [`normalize`]. Traversal
/// is document order unless `options.sort_keys` is set. Input trees are
/// acyclic by construction, so the recursion terminates at document depth.
///
/// # Examples
///
/// ```rust
/// use yaml2props::{flatten, from_str, FlattenOptions};
///
/// let doc = from_str("a: 1\nb:\n  c: 2\n  d:\n    e: 3").unwrap();
/// let keys: Vec<_> = flatten(&doc, &FlattenOptions::new())
///     .into_iter()
///     .map(|entry| entry.key)
///     .collect();
/// assert_eq!(keys, vec!["a", "b.c", "b.d.e"]);
/// ```
#[must_use]
pub fn flatten(doc: &Mapping, options: &FlattenOptions) -> Vec<FlatEntry> {
    flatten_level(doc, "", options)
}

fn flatten_level(doc: &Mapping, prefix: &str, options: &FlattenOptions) -> Vec<FlatEntry> {
    let mut pairs: Vec<(&String, &Value)> = doc.iter().collect();
    if options.sort_keys {
        pairs.sort_by(|a, b| a.0.cmp(b.0));
    }

    let mut entries = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            let mut joined = String::with_capacity(prefix.len() + key.len() + 1);
            joined.push_str(prefix);
            joined.push(options.separator);
            joined.push_str(key);
            joined
        };
        match value {
            Value::Mapping(nested) => entries.extend(flatten_level(nested, &full_key, options)),
            scalar => entries.push(FlatEntry {
                key: full_key,
                value: normalize(scalar),
            }),
        }
    }
    entries
}

/// Normalizes a scalar to a single safe properties line.
///
/// The value is rendered via its `Display` representation, then newline,
/// carriage-return, tab, backspace, form-feed, and NUL characters are
/// stripped, and the result is trimmed of surrounding whitespace. No
/// `=`/`:` or unicode escaping is applied.
///
/// # Examples
///
/// ```rust
/// use yaml2props::{normalize, Value};
///
/// assert_eq!(normalize(&Value::from("hello\nworld\t!")), "helloworld!");
/// assert_eq!(normalize(&Value::from(true)), "true");
/// assert_eq!(normalize(&Value::Null), "null");
/// ```
#[must_use]
pub fn normalize(value: &Value) -> String {
    let rendered = value.to_string();
    let stripped: String = rendered
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t' | '\u{0008}' | '\u{000C}' | '\0'))
        .collect();
    stripped.trim().to_string()
}

/// Renders entries as properties text, one `key=value` line per entry.
///
/// Every line, including the last, is `\n`-terminated; an empty entry
/// slice renders as an empty string.
pub(crate) fn render(entries: &[FlatEntry]) -> String {
    let capacity = entries
        .iter()
        .map(|entry| entry.key.len() + entry.value.len() + 2)
        .sum();
    let mut output = String::with_capacity(capacity);
    for entry in entries {
        output.push_str(&entry.key);
        output.push('=');
        output.push_str(&entry.value);
        output.push('\n');
    }
    output
}
