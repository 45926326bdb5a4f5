//! Decoder behavior on hand-written inputs: numeric probing, container edge
//! cases, duplicate keys and malformed text.

use serde_dynjson::{
    decode, decode_with_options, encode, DecodeOptions, Error, Number, Object, ParseErrorKind,
    Value,
};

fn single(text: &str) -> Value {
    let object = decode(text).unwrap();
    assert_eq!(object.len(), 1, "expected one entry in {}", text);
    object.into_iter().next().unwrap().1
}

#[test]
fn test_probe_order() {
    assert_eq!(single(r#"{"v":200}"#), Value::Number(Number::U8(200)));
    assert_eq!(single(r#"{"v":-200}"#), Value::Number(Number::I16(-200)));
    assert_eq!(single(r#"{"v":40000}"#), Value::Number(Number::U16(40000)));
    assert_eq!(single(r#"{"v":70000}"#), Value::Number(Number::I32(70000)));
    assert_eq!(
        single(r#"{"v":3000000000}"#),
        Value::Number(Number::U32(3_000_000_000))
    );
    assert_eq!(
        single(r#"{"v":-3000000000}"#),
        Value::Number(Number::I64(-3_000_000_000))
    );
    assert_eq!(
        single(r#"{"v":18446744073709551615}"#),
        Value::Number(Number::U64(u64::MAX))
    );
    assert_eq!(single(r#"{"v":3.14}"#), Value::Number(Number::F32(3.14)));
}

#[test]
fn test_float_probe_prefers_f32() {
    // f32 rounds tokens inside its range, so extra digits are dropped.
    let v = single(r#"{"v":3.141592653589793}"#);
    assert!(matches!(v, Value::Number(Number::F32(_))));
}

#[test]
fn test_float_probe_falls_through_to_f64_outside_f32_range() {
    assert_eq!(single(r#"{"v":1e300}"#), Value::Number(Number::F64(1e300)));
    assert_eq!(single(r#"{"v":-1e300}"#), Value::Number(Number::F64(-1e300)));
    assert_eq!(single(r#"{"v":1e-50}"#), Value::Number(Number::F64(1e-50)));

    let mut object = Object::new();
    object.insert("x".to_string(), Value::from(1e300f64));
    object.insert("y".to_string(), Value::from(1e-50f64));
    object.insert("z".to_string(), Value::from(f64::MAX));
    let back = decode(&encode(&object).unwrap()).unwrap();
    assert_eq!(back, object);
}

#[test]
fn test_empty_containers() {
    let object = decode("{}").unwrap();
    assert!(object.is_empty());
    assert_eq!(encode(&object).unwrap(), "{}");

    let text = r#"{"a":[],"b":{}}"#;
    let object = decode(text).unwrap();
    assert_eq!(object["a"], Value::Array(vec![]));
    assert_eq!(object["b"], Value::Object(Object::new()));
    assert_eq!(encode(&object).unwrap(), text);

    let spaced = decode("{ \"a\" : [ ] , \"b\" : { } }").unwrap();
    assert_eq!(spaced, object);
}

#[test]
fn test_duplicate_keys_last_wins() {
    let object = decode(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["a"], Value::Number(Number::U8(2)));

    let object = decode(r#"{"a":1,"b":2,"a":"three"}"#).unwrap();
    let keys: Vec<_> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(object["a"], Value::from("three"));
}

#[test]
fn test_malformed_inputs_fail() {
    let cases = [
        ("{", ParseErrorKind::MalformedStructure, 1),
        (r#"{"a":}"#, ParseErrorKind::UnrecognizedScalar, 5),
        (r#"{"a":[1,2"#, ParseErrorKind::MalformedStructure, 9),
        (r#"{"a":1"#, ParseErrorKind::MalformedStructure, 6),
        (r#"{"a":"#, ParseErrorKind::MalformedStructure, 5),
        (r#"{"a""#, ParseErrorKind::MalformedStructure, 4),
        (r#"{"a"#, ParseErrorKind::UnterminatedString, 1),
        (r#"{"a":"x";"b":2}"#, ParseErrorKind::MalformedStructure, 8),
        (r#"{"a":1;"b":2}"#, ParseErrorKind::UnrecognizedScalar, 5),
        (r#"{"a":[1;2]}"#, ParseErrorKind::UnrecognizedScalar, 6),
        (r#"{"a":abc}"#, ParseErrorKind::UnrecognizedScalar, 5),
        (r#"{"a":1.2.3}"#, ParseErrorKind::UnrecognizedScalar, 5),
        (r#"{"a":1 2}"#, ParseErrorKind::UnrecognizedScalar, 5),
        ("[]", ParseErrorKind::MalformedStructure, 0),
        ("", ParseErrorKind::MalformedStructure, 0),
    ];

    for (text, kind, offset) in cases {
        match decode(text) {
            Err(Error::Parse {
                kind: k, offset: o, ..
            }) => {
                assert_eq!(k, kind, "kind for {:?}", text);
                assert_eq!(o, offset, "offset for {:?}", text);
            }
            other => panic!("{:?} should fail, got {:?}", text, other),
        }
    }
}

#[test]
fn test_error_message_names_position() {
    let err = decode("{\"a\":1,\n\"b\":?}").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unrecognized scalar"), "{}", message);
    assert!(message.contains("offset 12"), "{}", message);
    assert!(message.contains("line 2, column 5"), "{}", message);
}

#[test]
fn test_raw_control_character_in_value_accepted() {
    let object = decode("{\"a\":\"x\ty\nz\u{7}\"}").unwrap();
    assert_eq!(object["a"].as_str(), Some("x\ty\nz\u{7}"));

    // Re-encoding escapes them.
    assert_eq!(encode(&object).unwrap(), r#"{"a":"x\ty\nz\a"}"#);
}

#[test]
fn test_raw_control_character_in_key_rejected() {
    for ch in ['\0', '\u{7}', '\u{8}', '\t', '\n', '\u{b}', '\u{c}', '\r'] {
        let text = format!("{{\"a{}b\":1}}", ch);
        let err = decode(&text).unwrap_err();
        assert_eq!(err.kind(), Some(ParseErrorKind::UnexpectedCharacter), "{:?}", ch);
        assert_eq!(err.offset(), Some(3));
    }
}

#[test]
fn test_other_control_characters_allowed_in_keys() {
    let object = decode("{\"a\u{1b}b\":1}").unwrap();
    assert!(object.contains_key("a\u{1b}b"));
}

#[test]
fn test_escape_sequences_in_values() {
    let object = decode(r#"{"s":"\\ \" \n \b \0 \a \f \r \t \v \q"}"#).unwrap();
    assert_eq!(
        object["s"].as_str(),
        Some("\\ \" \n \u{8} \0 \u{7} \u{c} \r \t \u{b} \\q")
    );
}

#[test]
fn test_literals_then_structure() {
    let object = decode(r#"{"a":[null,true,false],"b":false}"#).unwrap();
    assert_eq!(
        object["a"],
        Value::Array(vec![Value::Null, Value::Bool(true), Value::Bool(false)])
    );
    assert_eq!(object["b"], Value::Bool(false));
}

#[test]
fn test_pretty_whitespace() {
    let text = "{\r\n\t\"a\" :\t[\r\n\t\t1,\r\n\t\t2\r\n\t],\r\n\t\"b\" : \"c\"\r\n}";
    let object = decode(text).unwrap();
    assert_eq!(
        object["a"],
        Value::Array(vec![
            Value::Number(Number::U8(1)),
            Value::Number(Number::U8(2))
        ])
    );
    assert_eq!(object["b"].as_str(), Some("c"));
}

#[test]
fn test_trailing_content_ignored() {
    let object = decode("{\"a\":1}\n{\"b\":2} and more").unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("a"));
}

#[test]
fn test_depth_limit_option() {
    let nested = r#"{"a":{"b":{"c":{}}}}"#;
    assert!(decode_with_options(nested, &DecodeOptions::new().with_max_depth(4)).is_ok());

    let err = decode_with_options(nested, &DecodeOptions::new().with_max_depth(3)).unwrap_err();
    assert_eq!(err.kind(), Some(ParseErrorKind::DepthLimitExceeded));
    assert_eq!(err.offset(), Some(15));
}
