//! Forward iteration over the contents of a value.
//!
//! One iterator family walks every alternative: a sequence yields its
//! elements in order, a mapping yields its values in key order, a scalar
//! yields itself exactly once, and null yields nothing. Each iterator is a
//! small closed variant over the possible underlying positions; increment
//! and dereference dispatch on it.

use std::borrow::Cow;
use std::collections::btree_map;
use std::slice;

use crate::value::Value;

/// Shared-reference iterator over the contents of a value.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    position: Position<'a>,
}

#[derive(Debug, Clone)]
enum Position<'a> {
    Done,
    Scalar(&'a Value),
    Sequence(slice::Iter<'a, Value>),
    Mapping(btree_map::Values<'a, Value, Value>),
}

impl<'a> Iter<'a> {
    pub(crate) fn new(scope: &'a Value) -> Self {
        let position = match scope {
            Value::Null => Position::Done,
            Value::Sequence(items) => Position::Sequence(items.iter()),
            Value::Mapping(entries) => Position::Mapping(entries.values()),
            scalar => Position::Scalar(scalar),
        };
        Iter { position }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        match &mut self.position {
            Position::Done => None,
            Position::Sequence(items) => items.next(),
            Position::Mapping(values) => values.next(),
            Position::Scalar(value) => {
                let value = *value;
                self.position = Position::Done;
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.position {
            Position::Done => (0, Some(0)),
            Position::Scalar(_) => (1, Some(1)),
            Position::Sequence(items) => items.size_hint(),
            Position::Mapping(values) => values.size_hint(),
        }
    }
}

/// Mutable iterator over the contents of a value. Mapping keys stay frozen;
/// only the mapped values are reachable.
#[derive(Debug)]
pub struct IterMut<'a> {
    position: PositionMut<'a>,
}

#[derive(Debug)]
enum PositionMut<'a> {
    Done,
    Scalar(&'a mut Value),
    Sequence(slice::IterMut<'a, Value>),
    Mapping(btree_map::ValuesMut<'a, Value, Value>),
}

impl<'a> IterMut<'a> {
    pub(crate) fn new(scope: &'a mut Value) -> Self {
        let position = match scope {
            Value::Null => PositionMut::Done,
            Value::Sequence(items) => PositionMut::Sequence(items.iter_mut()),
            Value::Mapping(entries) => PositionMut::Mapping(entries.values_mut()),
            scalar => PositionMut::Scalar(scalar),
        };
        IterMut { position }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut Value;

    fn next(&mut self) -> Option<&'a mut Value> {
        match &mut self.position {
            PositionMut::Done => None,
            PositionMut::Sequence(items) => items.next(),
            PositionMut::Mapping(values) => values.next(),
            PositionMut::Scalar(_) => {
                match std::mem::replace(&mut self.position, PositionMut::Done) {
                    PositionMut::Scalar(value) => Some(value),
                    _ => None,
                }
            }
        }
    }
}

/// Key iterator: mapping keys in key order, or synthesized positional
/// indices for a sequence or scalar, so positional and associative
/// iteration share one vocabulary. Synthesized indices are owned, mapping
/// keys borrowed.
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    position: KeyPosition<'a>,
}

#[derive(Debug, Clone)]
enum KeyPosition<'a> {
    Indexed { next: usize, remaining: usize },
    Mapping(btree_map::Keys<'a, Value, Value>),
}

impl<'a> Keys<'a> {
    pub(crate) fn new(scope: &'a Value) -> Self {
        let position = match scope {
            Value::Null => KeyPosition::Indexed { next: 0, remaining: 0 },
            Value::Sequence(items) => KeyPosition::Indexed { next: 0, remaining: items.len() },
            Value::Mapping(entries) => KeyPosition::Mapping(entries.keys()),
            _ => KeyPosition::Indexed { next: 0, remaining: 1 },
        };
        Keys { position }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = Cow<'a, Value>;

    fn next(&mut self) -> Option<Cow<'a, Value>> {
        match &mut self.position {
            KeyPosition::Indexed { next, remaining } => {
                if *remaining == 0 {
                    return None;
                }
                let key = Value::from(*next);
                *next += 1;
                *remaining -= 1;
                Some(Cow::Owned(key))
            }
            KeyPosition::Mapping(keys) => keys.next().map(Cow::Borrowed),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.position {
            KeyPosition::Indexed { remaining, .. } => (*remaining, Some(*remaining)),
            KeyPosition::Mapping(keys) => keys.size_hint(),
        }
    }
}
