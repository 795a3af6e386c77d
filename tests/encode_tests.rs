use chrono::TimeZone;
use chrono::Utc;
use object_hash::{
    encode, encode_with_options, value, Array, EncodeOptions, Error, Key, Object, Opaque, Value,
};

#[test]
fn test_encodes_numbers() {
    // Integers
    assert_eq!(encode(&value!(123)).unwrap(), "number:123");
    assert_eq!(encode(&value!(42_069)).unwrap(), "number:42069");

    // Floats
    assert_eq!(encode(&value!(420.69)).unwrap(), "number:420.69");
    assert_eq!(encode(&value!(-1.5)).unwrap(), "number:-1.5");
}

#[test]
fn test_encodes_big_integers_exactly() {
    assert_eq!(
        encode(&Value::from(u64::MAX)).unwrap(),
        "number:18446744073709551615"
    );
}

#[test]
fn test_encodes_strings() {
    // Simple strings
    assert_eq!(
        encode(&value!("Hello World")).unwrap(),
        "string:11:Hello World"
    );
    assert_eq!(encode(&value!("Testing")).unwrap(), "string:7:Testing");

    // Complex strings, including an embedded token separator
    assert_eq!(
        encode(&value!("~9~N45u7k`25YfN")).unwrap(),
        "string:15:~9~N45u7k`25YfN"
    );
    assert_eq!(
        encode(&value!("~9~N45:u7k`25YfN")).unwrap(),
        "string:16:~9~N45:u7k`25YfN"
    );
}

#[test]
fn test_string_length_is_character_count() {
    // 5 characters, 7 bytes
    assert_eq!(encode(&value!("héllö")).unwrap(), "string:5:héllö");
    assert_eq!(encode(&value!("")).unwrap(), "string:0:");
}

#[test]
fn test_encodes_booleans() {
    assert_eq!(encode(&value!(true)).unwrap(), "bool:true");
    assert_eq!(encode(&value!(false)).unwrap(), "bool:false");
}

#[test]
fn test_encodes_null() {
    assert_eq!(encode(&value!(null)).unwrap(), "Null");
}

#[test]
fn test_encodes_symbols_distinct_from_strings() {
    assert_eq!(encode(&Value::symbol("a")).unwrap(), "symbol:a");
    assert_eq!(encode(&value!("a")).unwrap(), "string:1:a");
    assert_ne!(
        encode(&Value::symbol("a")).unwrap(),
        encode(&value!("a")).unwrap()
    );
}

#[test]
fn test_encodes_dates_utc_millis() {
    let dt = Utc.with_ymd_and_hms(2008, 6, 21, 13, 30, 0).unwrap();
    assert_eq!(
        encode(&Value::from(dt)).unwrap(),
        "date:2008-06-21T13:30:00.000Z"
    );
}

#[test]
fn test_encodes_arrays() {
    // Specify each element
    assert_eq!(
        encode(&value!([1, 2, 3])).unwrap(),
        "array:3:number:1number:2number:3"
    );

    // Order should matter here
    assert_eq!(
        encode(&value!([3, 2, 1])).unwrap(),
        "array:3:number:3number:2number:1"
    );
    assert_ne!(
        encode(&value!([3, 2, 1])).unwrap(),
        encode(&value!([1, 2, 3])).unwrap()
    );

    // Allow mixed types
    assert_eq!(
        encode(&value!(["Testing", 420, true, "Cool"])).unwrap(),
        "array:4:string:7:Testingnumber:420bool:truestring:4:Cool"
    );

    assert_eq!(encode(&value!([])).unwrap(), "array:0:");
}

#[test]
fn test_encodes_objects_sorted_by_encoded_key() {
    assert_eq!(
        encode(&value!({"a": 1, "b": 2, "c": 3})).unwrap(),
        "object:3:string:1:a:number:1,string:1:b:number:2,string:1:c:number:3,"
    );

    // Insertion order should NOT matter in the default mode
    assert_eq!(
        encode(&value!({"c": 1, "a": 2, "b": 3})).unwrap(),
        "object:3:string:1:a:number:2,string:1:b:number:3,string:1:c:number:1,"
    );
    assert_eq!(
        encode(&value!({"a": 2, "b": 3, "c": 1})).unwrap(),
        encode(&value!({"c": 1, "a": 2, "b": 3})).unwrap()
    );

    assert_eq!(encode(&value!({})).unwrap(), "object:0:");
}

#[test]
fn test_insertion_order_mode() {
    let options = EncodeOptions::new().with_unordered_objects(false);
    let value = value!({"c": 1, "a": 2, "b": 3});
    assert_eq!(
        encode_with_options(&value, &options).unwrap(),
        "object:3:string:1:c:number:1,string:1:a:number:2,string:1:b:number:3,"
    );
    assert_ne!(
        encode_with_options(&value, &options).unwrap(),
        encode(&value).unwrap()
    );
}

#[test]
fn test_object_entries_sort_by_encoded_key_text() {
    // A symbol key and a string key: "string:1:b" sorts before "symbol:a",
    // regardless of insertion order.
    let obj = Object::new();
    obj.insert(Key::symbol("a"), Value::from(1));
    obj.insert(Key::from("b"), Value::from(2));
    assert_eq!(
        encode(&Value::Object(obj)).unwrap(),
        "object:2:string:1:b:number:2,symbol:a:number:1,"
    );
}

#[test]
fn test_nested_containers() {
    let value = value!({
        "bar": [1, 3, 2],
        "baz": {"inner": null}
    });
    assert_eq!(
        encode(&value).unwrap(),
        "object:2:string:3:bar:array:3:number:1number:3number:2,\
         string:3:baz:object:1:string:5:inner:Null,,"
    );
}

#[test]
fn test_direct_self_reference() {
    let arr = Array::new();
    arr.push(Value::from(1));
    arr.push(Value::Array(arr.clone()));

    assert_eq!(
        encode(&Value::Array(arr)).unwrap(),
        "array:2:number:1string:12:[CIRCULAR:0]"
    );
}

#[test]
fn test_indirect_cycle_points_at_outermost_ancestor() {
    // outer object -> array -> outer object
    let outer = Object::new();
    let arr = Array::new();
    arr.push(Value::Object(outer.clone()));
    outer.insert("inner", Value::Array(arr));

    assert_eq!(
        encode(&Value::Object(outer)).unwrap(),
        "object:1:string:5:inner:array:1:string:12:[CIRCULAR:0],"
    );
}

#[test]
fn test_cycle_depth_counts_from_outermost() {
    // outer array -> inner array -> inner array: the marker names depth 1
    let inner = Array::new();
    inner.push(Value::Array(inner.clone()));
    let outer = Array::from(vec![Value::Array(inner)]);

    assert_eq!(
        encode(&Value::Array(outer)).unwrap(),
        "array:1:array:1:string:12:[CIRCULAR:1]"
    );
}

#[test]
fn test_sibling_repeats_are_not_circular() {
    // The same container twice as siblings: popped between visits, so both
    // occurrences encode fully.
    let shared = Array::from(vec![Value::from(1)]);
    let outer = Array::from(vec![Value::Array(shared.clone()), Value::Array(shared)]);

    assert_eq!(
        encode(&Value::Array(outer)).unwrap(),
        "array:2:array:1:number:1array:1:number:1"
    );
}

#[test]
fn test_structural_twins_are_not_circular() {
    // Two structurally-equal but distinct containers must not be flagged.
    let a = Array::from(vec![Value::from(1)]);
    let b = Array::from(vec![Value::from(1)]);
    assert_eq!(Value::Array(a.clone()), Value::Array(b.clone()));

    let outer = Array::from(vec![Value::Array(a), Value::Array(b)]);
    assert_eq!(
        encode(&Value::Array(outer)).unwrap(),
        "array:2:array:1:number:1array:1:number:1"
    );
}

#[test]
fn test_opaque_without_replacer_fails() {
    struct Mystery;

    let value = Value::Opaque(Opaque::new(Mystery));
    let err = encode(&value).unwrap_err();
    assert!(matches!(err, Error::NoEncoder(ref name) if name.contains("Mystery")));
}

#[test]
fn test_replacer_that_declines_still_fails() {
    struct Mystery;

    let options = EncodeOptions::new().with_replacer(|_: &Value| None);
    let value = Value::Opaque(Opaque::new(Mystery));
    assert!(matches!(
        encode_with_options(&value, &options),
        Err(Error::NoEncoder(_))
    ));
}

#[test]
fn test_replacer_output_is_recanonicalized() {
    struct Mystery;

    // The override becomes a String node and gets the string token, it is
    // never spliced into the output verbatim.
    let options = EncodeOptions::new()
        .with_replacer(|v: &Value| v.as_opaque().map(|_| Value::from("foobar")));
    let value = Value::Opaque(Opaque::new(Mystery));
    assert_eq!(
        encode_with_options(&value, &options).unwrap(),
        "string:6:foobar"
    );
}

#[test]
fn test_replacer_rewrites_in_stages() {
    struct Mystery;

    let options = EncodeOptions::new().with_replacer(|v: &Value| {
        if v.is_opaque() {
            Some(Value::from("stage"))
        } else if v.as_str() == Some("stage") {
            Some(Value::from(7))
        } else {
            None
        }
    });
    let value = Value::Opaque(Opaque::new(Mystery));
    assert_eq!(encode_with_options(&value, &options).unwrap(), "number:7");
}

#[test]
fn test_replacer_sees_supported_values_too() {
    let options = EncodeOptions::new().with_replacer(|v: &Value| {
        if v.as_i64() == Some(1) {
            Some(Value::from(2))
        } else {
            None
        }
    });
    assert_eq!(
        encode_with_options(&value!([1, 5]), &options).unwrap(),
        "array:2:number:2number:5"
    );
}

#[test]
fn test_encoding_is_repeatable() {
    let value = value!({"k": [1, true, "x"], "d": null});
    let first = encode(&value).unwrap();
    let second = encode(&value).unwrap();
    assert_eq!(first, second);
}
