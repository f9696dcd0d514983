use dynval::Value;

#[test]
fn sequence_iteration_preserves_order() {
    let sequence = Value::sequence([1, 2, 3]);
    let collected: Vec<&Value> = sequence.iter().collect();
    assert_eq!(
        collected,
        vec![&Value::from(1), &Value::from(2), &Value::from(3)]
    );
}

#[test]
fn mapping_iteration_yields_values_in_key_order() {
    let mapping = Value::mapping([("b", 2), ("a", 1), ("c", 3)]);
    let values: Vec<&Value> = mapping.iter().collect();
    assert_eq!(
        values,
        vec![&Value::from(1), &Value::from(2), &Value::from(3)]
    );
}

#[test]
fn scalars_iterate_once_over_themselves() {
    let scalar = Value::from(2i64);
    let collected: Vec<&Value> = scalar.iter().collect();
    assert_eq!(collected, vec![&Value::from(2)]);

    let nothing: Vec<&Value> = Value::Null.iter().collect();
    assert!(nothing.is_empty());
}

#[test]
fn keys_synthesize_indices_for_positional_scopes() {
    let sequence = Value::sequence(["a", "b", "c"]);
    let keys: Vec<Value> = sequence.keys().map(|k| k.into_owned()).collect();
    assert_eq!(keys, vec![Value::from(0u64), Value::from(1u64), Value::from(2u64)]);

    let scalar_keys: Vec<Value> = Value::from(true).keys().map(|k| k.into_owned()).collect();
    assert_eq!(scalar_keys, vec![Value::from(0u64)]);

    assert_eq!(Value::Null.keys().count(), 0);
}

#[test]
fn key_round_trip_through_a_mapping() {
    let mapping = Value::mapping([("a", 1), ("b", 2)]);
    assert_eq!(mapping.count("a"), 1);
    assert_eq!(mapping.find("a"), Some(&Value::from(1)));

    let keys: Vec<Value> = mapping.keys().map(|k| k.into_owned()).collect();
    assert_eq!(keys, vec![Value::from("a"), Value::from("b")]);

    // Zipping keys with values reconstructs the entries, which is all a
    // codec needs to serialize a mapping.
    let entries: Vec<(Value, Value)> = mapping
        .keys()
        .zip(mapping.iter())
        .map(|(k, v)| (k.into_owned(), v.clone()))
        .collect();
    assert_eq!(
        entries,
        vec![
            (Value::from("a"), Value::from(1)),
            (Value::from("b"), Value::from(2)),
        ]
    );
}

#[test]
fn mutable_iteration_reaches_every_element() {
    let mut sequence = Value::sequence([1, 2, 3]);
    for item in sequence.iter_mut() {
        item.try_add_assign(&Value::from(10)).unwrap();
    }
    assert_eq!(sequence, Value::sequence([11, 12, 13]));

    let mut mapping = Value::mapping([("a", 1), ("b", 2)]);
    for value in &mut mapping {
        *value = Value::from("seen");
    }
    assert_eq!(mapping.at_key("a").unwrap(), &Value::from("seen"));
    assert_eq!(mapping.at_key("b").unwrap(), &Value::from("seen"));

    let mut scalar = Value::from(5);
    for value in scalar.iter_mut() {
        *value = Value::from(6);
    }
    assert_eq!(scalar, Value::from(6));
}

#[test]
fn erase_keeps_survivors_in_relative_order() {
    for index in 0..3usize {
        let mut sequence = Value::sequence([10, 20, 30]);
        sequence.remove_at(index).unwrap();
        assert_eq!(sequence.len(), 2);
        let survivors: Vec<&Value> = sequence.iter().collect();
        let expected: Vec<Value> = [10, 20, 30]
            .iter()
            .enumerate()
            .filter(|(nth, _)| *nth != index)
            .map(|(_, v)| Value::from(*v))
            .collect();
        let expected: Vec<&Value> = expected.iter().collect();
        assert_eq!(survivors, expected);
    }
}

#[test]
fn for_loops_borrow_the_scope() {
    let sequence = Value::sequence([1, 2, 3]);
    let mut total = Value::from(0);
    for item in &sequence {
        total.try_add_assign(item).unwrap();
    }
    assert_eq!(total, Value::from(6));
}
