use std::cmp::Ordering;

use dynval::Value;

/// A spread of values touching every category, with deliberate cross-kind
/// duplicates (integer 2, unsigned 2, real 2.0) and awkward numerics.
fn samples() -> Vec<Value> {
    vec![
        Value::Null,
        Value::from(false),
        Value::from(true),
        Value::from(-3i64),
        Value::from(2i64),
        Value::from(2u64),
        Value::from(2.0),
        Value::from(2.5),
        Value::from(u64::MAX),
        Value::from(i64::MAX),
        Value::from((1i64 << 53) + 1),
        Value::from((1u64 << 53) as f64),
        Value::from(f64::NEG_INFINITY),
        Value::from(f64::INFINITY),
        Value::from(f64::NAN),
        Value::from(""),
        Value::from("2"),
        Value::from("alpha"),
        Value::sequence(Vec::<Value>::new()),
        Value::sequence([1, 2]),
        Value::sequence([1, 2, 3]),
        Value::mapping(Vec::<(Value, Value)>::new()),
        Value::mapping([("a", 1)]),
        Value::mapping([("a", 2)]),
        Value::mapping([("a", 1), ("b", 2)]),
    ]
}

#[test]
fn order_is_reflexive_and_antisymmetric() {
    let values = samples();
    for x in &values {
        assert_eq!(x.cmp(x), Ordering::Equal, "{:?}", x);
        assert!(!(x < x));
    }
    for x in &values {
        for y in &values {
            assert_eq!(x.cmp(y), y.cmp(x).reverse(), "{:?} vs {:?}", x, y);
        }
    }
}

#[test]
fn order_is_trichotomous() {
    let values = samples();
    for x in &values {
        for y in &values {
            let outcomes = [x < y, y < x, x == y];
            assert_eq!(
                outcomes.iter().filter(|&&b| b).count(),
                1,
                "{:?} vs {:?}",
                x,
                y
            );
        }
    }
}

#[test]
fn order_is_transitive() {
    let values = samples();
    for x in &values {
        for y in &values {
            for z in &values {
                if x <= y && y <= z {
                    assert!(x <= z, "{:?} <= {:?} <= {:?}", x, y, z);
                }
            }
        }
    }
}

#[test]
fn categories_rank_before_content() {
    let null = Value::Null;
    let boolean = Value::from(true);
    let number = Value::from(i64::MAX);
    let text = Value::from("");
    let sequence = Value::sequence(Vec::<Value>::new());
    let mapping = Value::mapping(Vec::<(Value, Value)>::new());
    assert!(null < boolean);
    assert!(boolean < number);
    assert!(number < text);
    assert!(text < sequence);
    assert!(sequence < mapping);
}

#[test]
fn heterogeneous_numerics_compare_by_value() {
    assert_eq!(Value::from(2i64), Value::from(2.0));
    assert_eq!(Value::from(2i64), Value::from(2u64));
    assert_eq!(Value::from(2u64), Value::from(2.0));
    assert!(Value::from(2i64) < Value::from("2"));
    assert!(Value::from(2.0) < Value::from("2"));
    assert!(Value::from(-1i64) < Value::from(0u64));
    assert!(Value::from(false) < Value::from(true));
}

#[test]
fn large_integers_do_not_collapse_into_nearby_reals() {
    // (2^53 + 1) as f64 rounds to 2^53; the exact relation keeps them apart.
    let int = Value::from((1i64 << 53) + 1);
    let real = Value::from((1u64 << 53) as f64);
    assert_ne!(int, real);
    assert!(real < int);

    // i64::MAX is not representable as f64; the nearest real is 2^63.
    assert!(Value::from(i64::MAX) < Value::from(i64::MAX as f64));
    assert_eq!(Value::from(i64::MIN), Value::from(i64::MIN as f64));
}

#[test]
fn nan_is_ordered_and_equal_to_itself() {
    let nan = Value::from(f64::NAN);
    assert_eq!(nan, Value::from(f64::NAN));
    assert!(Value::from(f64::INFINITY) < nan);
    assert!(Value::from(u64::MAX) < nan);
    assert!(nan < Value::from(""));
}

#[test]
fn sequences_compare_lexicographically() {
    assert!(Value::sequence([1, 2]) < Value::sequence([1, 3]));
    assert!(Value::sequence([1, 2]) < Value::sequence([1, 2, 0]));
    assert_eq!(Value::sequence([1, 2]), Value::sequence([1.0, 2.0]));
}

#[test]
fn mappings_compare_by_size_then_pairs() {
    // Fewer entries sort first even when the pairs would sort later.
    let small = Value::mapping([("z", 9)]);
    let large = Value::mapping([("a", 1), ("b", 2)]);
    assert!(small < large);

    let left = Value::mapping([("a", 1)]);
    let right = Value::mapping([("a", 2)]);
    assert!(left < right);
}

#[test]
fn mapping_keys_stay_unique_under_the_relation() {
    let mut mapping = Value::mapping(Vec::<(Value, Value)>::new());
    mapping.insert_entry(2i64, "int").unwrap();
    mapping.insert_entry(2.0f64, "real").unwrap();
    mapping.insert_entry(2u64, "unsigned").unwrap();
    // All three keys compare equal, so they are one entry.
    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.at_key(2i64).unwrap(), &Value::from("unsigned"));
}

#[test]
fn mapping_iteration_is_key_sorted() {
    let mapping = Value::mapping([("c", 3), ("a", 1), ("b", 2)]);
    let keys: Vec<Value> = mapping.keys().map(|k| k.into_owned()).collect();
    assert_eq!(keys, vec![Value::from("a"), Value::from("b"), Value::from("c")]);
}
