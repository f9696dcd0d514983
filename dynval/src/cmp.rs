//! The total order over values.
//!
//! Mappings use values as their own keys, so the order must be total and
//! strict-weak across every alternative. Cross-type precedence comes first
//! (by [`Category`](crate::kind::Category)), then the within-category rules
//! below.

use std::cmp::Ordering;

use crate::convert::NumberLike;
use crate::value::Value;

impl Ord for Value {
    /// 1. by category: `Null < Boolean < Numeric < Text < Sequence <
    ///    Mapping`;
    /// 2. numerics by numeric value, exactly, across representations (see
    ///    [`NumberLike::cmp_number`]);
    /// 3. text lexicographically by code unit;
    /// 4. sequences lexicographically by element, recursively;
    /// 5. mappings by entry count, then lexicographically by (key, value)
    ///    pairs in key order.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Value::Sequence(a), Value::Sequence(b)) => a.cmp(b),
            (Value::Mapping(a), Value::Mapping(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.iter().cmp(b.iter()))
            }
            _ => match (NumberLike::try_from(self), NumberLike::try_from(other)) {
                (Ok(a), Ok(b)) => a.cmp_number(&b),
                _ => self.category().cmp(&other.category()),
            },
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    /// The symmetric collapse of the total order: an integer `2` equals a
    /// real `2.0` even though their kinds differ.
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}
