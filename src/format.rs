//! Output Format
//!
//! This module documents the properties output produced by this crate.
//!
//! # Overview
//!
//! The output is Java-style `.properties` text: UTF-8, one `key=value`
//! line per flattened leaf scalar, `\n` line endings, every line
//! terminated. An empty document produces an empty file.
//!
//! # Keys
//!
//! A leaf's key is the separator-joined path of mapping keys from the
//! document root to that leaf (default separator `.`):
//!
//! ```text
//! server:
//!   http:
//!     port: 8080
//! ```
//!
//! becomes
//!
//! ```text
//! server.http.port=8080
//! ```
//!
//! Mapping keys that YAML types as numbers or booleans are coerced to
//! their textual form at parse time, so `8080: x` contributes the key
//! segment `8080`.
//!
//! # Values
//!
//! | Document value | Rendering |
//! |----------------|-----------|
//! | Null | `null` |
//! | Boolean | `true` or `false` |
//! | Integer | decimal digits, optional `-` |
//! | Float | Rust's default `f64` formatting (`2.5`, `inf`, `NaN`) |
//! | String | the raw string |
//! | Sequence | comma-joined element renderings in brackets, e.g. `[a,b,c]` |
//!
//! After rendering, newline, carriage-return, tab, backspace, form-feed,
//! and NUL characters are stripped and the result is trimmed, so every
//! value occupies a single line.
//!
//! # Ordering
//!
//! Lines appear in document order, which is deterministic for a given
//! input file. With key sorting enabled, keys are ordered
//! lexicographically within each nesting level instead.
//!
//! # Fidelity gaps
//!
//! No properties-file escaping is applied: `=`, `:`, leading whitespace
//! significance, and non-ASCII characters are emitted verbatim rather
//! than escaped as `\=`, `\:`, or `\uXXXX`. Sequences are never expanded
//! into indexed keys (`tags.0`, `tags.1`); they render inline as a single
//! value.
