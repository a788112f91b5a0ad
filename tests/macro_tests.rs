use yaml2props::{yaml, Mapping, Number, Value};

#[test]
fn test_yaml_macro_null() {
    let value = yaml!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_yaml_macro_booleans() {
    let true_val = yaml!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = yaml!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_yaml_macro_numbers() {
    let int_val = yaml!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = yaml!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = yaml!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));
}

#[test]
fn test_yaml_macro_strings() {
    let string_val = yaml!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = yaml!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_yaml_macro_sequences() {
    let empty_seq = yaml!([]);
    assert_eq!(empty_seq, Value::Sequence(vec![]));

    let number_seq = yaml!([1, 2, 3]);
    assert_eq!(
        number_seq,
        Value::Sequence(vec![
            Value::Number(Number::Integer(1)),
            Value::Number(Number::Integer(2)),
            Value::Number(Number::Integer(3)),
        ])
    );

    let mixed_seq = yaml!([1, "hello", true, null]);
    assert_eq!(
        mixed_seq,
        Value::Sequence(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_yaml_macro_mappings() {
    let empty_mapping = yaml!({});
    assert_eq!(empty_mapping, Value::Mapping(Mapping::new()));

    let simple_mapping = yaml!({
        "name": "Alice",
        "age": 30
    });

    match simple_mapping {
        Value::Mapping(ref doc) => {
            assert_eq!(doc.len(), 2);
            assert_eq!(doc.get("name").and_then(Value::as_str), Some("Alice"));
            assert_eq!(doc.get("age").and_then(Value::as_i64), Some(30));
        }
        other => panic!("expected mapping, got {:?}", other),
    }
}

#[test]
fn test_yaml_macro_nested() {
    let value = yaml!({
        "server": {
            "host": "localhost",
            "port": 8080
        },
        "tags": ["a", "b"]
    });

    let root = value.as_mapping().unwrap();
    let server = root.get("server").and_then(Value::as_mapping).unwrap();
    assert_eq!(server.get("host").and_then(Value::as_str), Some("localhost"));
    assert_eq!(server.get("port").and_then(Value::as_i64), Some(8080));
    assert_eq!(root.get("tags").and_then(Value::as_sequence).map(Vec::len), Some(2));
}

#[test]
fn test_yaml_macro_preserves_insertion_order() {
    let value = yaml!({
        "zebra": 1,
        "apple": 2,
        "mango": 3
    });

    let keys: Vec<_> = value.as_mapping().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_yaml_macro_expression_fallback() {
    let port = 8080u16;
    let value = yaml!(port);
    assert_eq!(value, Value::Number(Number::Integer(8080)));

    let name = String::from("demo");
    let value = yaml!(name);
    assert_eq!(value, Value::String("demo".to_string()));
}
