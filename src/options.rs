//! Configuration options for flattening.
//!
//! This module provides [`FlattenOptions`], which controls two aspects of
//! the output:
//!
//! - the separator joining nested key segments (default `.`)
//! - whether keys are sorted lexicographically per nesting level instead of
//!   keeping document order
//!
//! ## Examples
//!
//! ```rust
//! use yaml2props::{from_str, to_string_with_options, FlattenOptions};
//!
//! let doc = from_str("b: 2\na: 1").unwrap();
//!
//! // Sort keys for output independent of source layout
//! let options = FlattenOptions::sorted();
//! assert_eq!(to_string_with_options(&doc, &options), "a=1\nb=2\n");
//!
//! // Use a custom separator
//! let doc = from_str("outer:\n  inner: 1").unwrap();
//! let options = FlattenOptions::new().with_separator('_');
//! assert_eq!(to_string_with_options(&doc, &options), "outer_inner=1\n");
//! ```

/// Configuration options for flattening a document into properties lines.
///
/// # Examples
///
/// ```rust
/// use yaml2props::FlattenOptions;
///
/// // Default: dot separator, document order
/// let options = FlattenOptions::new();
///
/// // Sorted keys
/// let options = FlattenOptions::sorted();
///
/// // Custom configuration
/// let options = FlattenOptions::new().with_separator(':').with_sorted_keys();
/// ```
#[derive(Clone, Debug)]
pub struct FlattenOptions {
    pub separator: char,
    pub sort_keys: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        FlattenOptions {
            separator: '.',
            sort_keys: false,
        }
    }
}

impl FlattenOptions {
    /// Creates default options (dot separator, document order preserved).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yaml2props::FlattenOptions;
    ///
    /// let options = FlattenOptions::new();
    /// assert_eq!(options.separator, '.');
    /// assert!(!options.sort_keys);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that sort keys lexicographically at every nesting level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yaml2props::FlattenOptions;
    ///
    /// let options = FlattenOptions::sorted();
    /// assert!(options.sort_keys);
    /// ```
    #[must_use]
    pub fn sorted() -> Self {
        FlattenOptions {
            sort_keys: true,
            ..Default::default()
        }
    }

    /// Sets the separator joining nested key segments.
    ///
    /// Default is `.`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yaml2props::FlattenOptions;
    ///
    /// let options = FlattenOptions::new().with_separator('/');
    /// assert_eq!(options.separator, '/');
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Enables lexicographic key sorting per nesting level.
    #[must_use]
    pub fn with_sorted_keys(mut self) -> Self {
        self.sort_keys = true;
        self
    }
}
