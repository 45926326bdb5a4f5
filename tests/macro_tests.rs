use serde_dynjson::{decode, dynjson, encode_value, Number, Object, Value};

#[test]
fn test_dynjson_macro_null() {
    let value = dynjson!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_dynjson_macro_booleans() {
    assert_eq!(dynjson!(true), Value::Bool(true));
    assert_eq!(dynjson!(false), Value::Bool(false));
}

#[test]
fn test_dynjson_macro_numbers() {
    assert_eq!(dynjson!(42), Value::Number(Number::I32(42)));
    assert_eq!(dynjson!(3.5), Value::Number(Number::F64(3.5)));
    assert_eq!(dynjson!(-123), Value::Number(Number::I32(-123)));
    assert_eq!(dynjson!(200u8), Value::Number(Number::U8(200)));
    assert_eq!(dynjson!(1.5f32), Value::Number(Number::F32(1.5)));
}

#[test]
fn test_dynjson_macro_strings() {
    assert_eq!(dynjson!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(dynjson!(""), Value::String(String::new()));
}

#[test]
fn test_dynjson_macro_arrays() {
    assert_eq!(dynjson!([]), Value::Array(vec![]));

    let mixed_array = dynjson!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::Array(vec![
            Value::Number(Number::I32(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_dynjson_macro_nested() {
    let nested = dynjson!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let obj = nested.as_object().unwrap();
    assert_eq!(obj.len(), 3);

    let user = obj["user"].as_object().unwrap();
    assert_eq!(user.get("id"), Some(&Value::Number(Number::I32(123))));
    assert_eq!(user.get("name"), Some(&Value::from("Bob")));
    assert_eq!(user.get("active"), Some(&Value::Bool(true)));

    let tags = obj["tags"].as_array().unwrap();
    assert_eq!(tags, &vec![Value::from("admin"), Value::from("developer")]);

    let keys: Vec<_> = obj.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["user", "tags", "count"]);
}

#[test]
fn test_dynjson_macro_encodes_in_order() {
    let value = dynjson!({
        "z": 1,
        "a": [true, null],
        "m": {}
    });
    assert_eq!(encode_value(&value).unwrap(), r#"{"z":1,"a":[true,null],"m":{}}"#);
}

#[test]
fn test_dynjson_macro_roundtrip_equivalent() {
    let value = dynjson!({
        "id": 70000,
        "ratio": 0.5,
        "label": "tab\there",
        "items": [1, 2, 3]
    });
    let text = encode_value(&value).unwrap();
    let back = Value::Object(decode(&text).unwrap());

    assert!(back.equivalent(&value));
    // Widths collapse, so strict equality does not hold.
    assert_ne!(back, value);
}

#[test]
fn test_value_methods() {
    let null_val = dynjson!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());
    assert!(!null_val.is_serializable());

    let bool_val = dynjson!(true);
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = dynjson!("hello");
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = dynjson!([1, 2, 3]);
    assert_eq!(array_val.as_array().map(Vec::len), Some(3));

    let obj_val = dynjson!({"key": "value"});
    assert_eq!(obj_val.as_object().map(Object::len), Some(1));
}

#[test]
fn test_unconvertible_expression_becomes_null() {
    let mut keyed_by_array = std::collections::BTreeMap::new();
    keyed_by_array.insert(vec![1u8], "one");

    assert!(serde_dynjson::to_value(&keyed_by_array).is_err());
    assert_eq!(dynjson!(keyed_by_array), Value::Null);
}
