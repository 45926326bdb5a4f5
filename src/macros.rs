/// Builds a [`Value`](crate::Value) from literal syntax.
///
/// Object keys must be string literals. Anything that is not `null`,
/// `true`, `false`, an array or an object goes through
/// [`to_value`](crate::to_value), so integer literals take their inferred
/// Rust type (`i32` unless suffixed).
///
/// An expression that fails to convert becomes `null` instead of an error,
/// for example a map with non-scalar keys. Call `to_value` directly to see
/// the error.
///
/// ```rust
/// use serde_dynjson::{dynjson, Number, Value};
///
/// let value = dynjson!({ "id": 7u8, "tags": [], "ok": true });
/// let object = value.as_object().unwrap();
/// assert_eq!(object["id"], Value::Number(Number::U8(7)));
/// assert_eq!(object["tags"], Value::Array(vec![]));
/// ```
#[macro_export]
macro_rules! dynjson {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::dynjson!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Object::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Object::new();
        $(
            object.insert($key.to_string(), $crate::dynjson!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Any other expression, e.g. a variable or a suffixed literal.
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
