//! Property-based tests for the round-trip guarantees.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_dynjson::escape::{escape, unescape};
use serde_dynjson::{decode, encode, encode_pretty, from_str, to_string, Number, Object, Value};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Wrapper<T> {
    value: T,
}

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(&Wrapper { value }) {
        Ok(text) => match from_str::<Wrapper<T>>(&text) {
            Ok(back) => *value == back.value,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Text was: {}", text);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn any_finite_f32() -> impl Strategy<Value = f32> {
    prop::num::f32::NORMAL | prop::num::f32::SUBNORMAL | prop::num::f32::ZERO
}

fn any_finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i8>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any_finite_f32().prop_map(Value::from),
        any_finite_f64().prop_map(Value::from),
        any::<String>().prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec(("[a-z_]{1,8}", inner), 0..8)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn wrap(value: Value) -> Object {
    let mut object = Object::new();
    object.insert("x".to_string(), value);
    object
}

proptest! {
    #[test]
    fn prop_unescape_inverts_escape(s in any::<String>()) {
        prop_assert_eq!(unescape(&escape(&s)), s);
    }

    #[test]
    fn prop_escape_has_no_raw_specials(s in any::<String>()) {
        let escaped = escape(&s);
        prop_assert!(!escaped.chars().any(serde_dynjson::escape::is_special_char));
    }

    #[test]
    fn prop_value_roundtrip_equivalent(v in arb_value()) {
        let object = wrap(v.clone());
        let text = encode(&object).unwrap();
        let back = decode(&text).unwrap();
        prop_assert!(
            back["x"].equivalent(&v),
            "text {} decoded to {:?}", text, back["x"]
        );
    }

    #[test]
    fn prop_pretty_decodes_like_compact(v in arb_value()) {
        let object = wrap(v);
        let compact = decode(&encode(&object).unwrap()).unwrap();
        let pretty = decode(&encode_pretty(&object).unwrap()).unwrap();
        prop_assert_eq!(compact, pretty);
    }

    #[test]
    fn prop_encode_decode_encode_stable(v in arb_value()) {
        // After one decode the widths are settled, so text is a fixed point.
        let once = encode(&decode(&encode(&wrap(v)).unwrap()).unwrap()).unwrap();
        let twice = encode(&decode(&once).unwrap()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_small_unsigned_probe_as_u8(n in any::<u8>()) {
        prop_assert_eq!(Number::probe(&n.to_string()), Some(Number::U8(n)));
    }

    #[test]
    fn prop_integers_probe_equivalent(n in any::<i64>()) {
        let probed = Number::probe(&n.to_string()).unwrap();
        prop_assert!(probed.is_integer());
        prop_assert!(probed.equivalent(&Number::I64(n)));
    }

    #[test]
    fn prop_decode_never_panics(s in any::<String>()) {
        let _ = decode(&s);
    }

    #[test]
    fn prop_decode_never_panics_on_object_like(s in "\\{[\"a-z0-9:,\\[\\]{} \\\\.-]{0,40}") {
        let _ = decode(&s);
    }

    // Past 3.5e38 an f32 parse overflows and below 1e-46 it rounds to zero,
    // so the decoder keeps the f64.
    #[test]
    fn prop_f64_outside_f32_range_is_exact(f in any_finite_f64()) {
        let text = encode(&wrap(Value::from(f))).unwrap();
        let back = decode(&text).unwrap();
        if f != 0.0 && (f.abs() > 3.5e38 || f.abs() < 1e-46) {
            prop_assert_eq!(&back["x"], &Value::from(f), "text {}", text);
        } else {
            prop_assert!(back["x"].equivalent(&Value::from(f)), "text {}", text);
        }
    }

    #[test]
    fn prop_f64_serde_roundtrip_outside_f32_range(f in any_finite_f64()) {
        prop_assume!(f != 0.0 && (f.abs() > 3.5e38 || f.abs() < 1e-46));
        prop_assert!(roundtrip(&f));
    }

    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u64(n in any::<u64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_string(s in any::<String>()) {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }
}
