/// Builds a [`Value`](crate::Value) from a literal-like syntax.
///
/// Arrays become shared [`Array`](crate::Array) handles and object literals
/// become shared [`Object`](crate::Object) handles with string keys in the
/// written order.
///
/// # Examples
///
/// ```rust
/// use object_hash::{value, Value};
///
/// let data = value!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["admin", "user"]
/// });
///
/// assert!(data.is_object());
/// ```
#[macro_export]
macro_rules! value {
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

    // Handle empty array
    ([]) => {
        $crate::Value::Array($crate::Array::new())
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array($crate::Array::from(vec![$($crate::value!($elem)),*]))
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::Object::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $val:tt),* $(,)? }) => {{
        let object = $crate::Object::new();
        $(
            object.insert($crate::Key::from($key), $crate::value!($val));
        )*
        $crate::Value::Object(object)
    }};

    // Anything else goes through the From conversions
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert!(matches!(value!([]), Value::Array(arr) if arr.is_empty()));

        let arr = value!([1, 2, 3]);
        match arr {
            Value::Array(arr) => {
                assert_eq!(arr.len(), 3);
                assert_eq!(arr.get(0), Some(Value::from(1)));
                assert_eq!(arr.get(1), Some(Value::from(2)));
                assert_eq!(arr.get(2), Some(Value::from(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_value_macro_objects() {
        assert!(matches!(value!({}), Value::Object(obj) if obj.is_empty()));

        let obj = value!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(obj) => {
                assert_eq!(obj.len(), 2);
                assert_eq!(obj.get_str("name"), Some(Value::from("Alice")));
                assert_eq!(obj.get_str("age"), Some(Value::from(30)));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_value_macro_nested() {
        let nested = value!({
            "items": [1, [2, 3], {"deep": true}]
        });

        let items = nested
            .as_object()
            .and_then(|o| o.get_str("items"))
            .expect("items");
        assert_eq!(items.as_array().map(crate::Array::len), Some(3));
    }
}
