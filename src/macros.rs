/// Builds a [`Value`](crate::Value) tree from JSON-like literal syntax.
///
/// ```rust
/// use yaml2props::yaml;
///
/// let doc = yaml!({
///     "a": 1,
///     "b": { "c": 2 }
/// });
/// assert!(doc.is_mapping());
/// ```
#[macro_export]
macro_rules! yaml {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty sequence
    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::yaml!($elem)),*])
    };

    // Handle empty mapping
    ({}) => {
        $crate::Value::Mapping($crate::Mapping::new())
    };

    // Handle non-empty mapping
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert($key.to_string(), $crate::yaml!($value));
        )*
        $crate::Value::Mapping(mapping)
    }};

    // Fallback for any other expression with a From conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
