//! Property-based tests - pragmatic approach testing the flattening laws
//!
//! These tests complement the integration tests by verifying the core
//! guarantees across a wide range of generated inputs. Focus is on common
//! use cases.

use proptest::prelude::*;
use yaml2props::{flatten, normalize, FlattenOptions, Mapping, Value};

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,20}".prop_map(Value::from),
    ]
}

fn flat_doc() -> impl Strategy<Value = Mapping> {
    prop::collection::hash_map(key(), scalar(), 0..10)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_normalize_strips_control_characters(s in any::<String>()) {
        let normalized = normalize(&Value::from(s));
        prop_assert!(!normalized.contains(&['\n', '\r', '\t', '\u{0008}', '\u{000C}', '\0'][..]));
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    #[test]
    fn prop_flat_document_one_entry_per_key(doc in flat_doc()) {
        let entries = flatten(&doc, &FlattenOptions::new());
        prop_assert_eq!(entries.len(), doc.len());
        for entry in &entries {
            prop_assert!(doc.get(&entry.key).is_some());
            prop_assert!(!entry.key.contains('.'));
        }
    }

    #[test]
    fn prop_flatten_is_idempotent(doc in flat_doc()) {
        let options = FlattenOptions::new();
        prop_assert_eq!(flatten(&doc, &options), flatten(&doc, &options));
    }

    #[test]
    fn prop_nested_keys_are_prefix_joined(outer in key(), inner in flat_doc()) {
        let mut root = Mapping::new();
        root.insert(outer.clone(), Value::Mapping(inner.clone()));
        let entries = flatten(&root, &FlattenOptions::new());

        prop_assert_eq!(entries.len(), inner.len());
        for entry in &entries {
            let prefix = format!("{}.", outer);
            prop_assert!(entry.key.starts_with(&prefix));
            prop_assert!(inner.get(&entry.key[prefix.len()..]).is_some());
        }
    }

    #[test]
    fn prop_sorted_output_is_ordered(doc in flat_doc()) {
        let entries = flatten(&doc, &FlattenOptions::sorted());
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(keys, sorted);
    }
}
