use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::Error;
use crate::value::Value;

/// The extraction side of the conversion framework.
///
/// The implementing type is the "tag" selecting the extraction logic at
/// compile time; [`Value::value`] is the entry point. The built-in impls
/// cover the native scalars and the container types. External adapters teach
/// the system new types by implementing this trait for extraction and
/// `From<TheirType> for Value` for construction; the core needs no knowledge
/// of the adapted type.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, Error>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(value.clone())
    }
}

impl FromValue for () {
    fn from_value(value: &Value) -> Result<Self, Error> {
        if value.is_null() {
            Ok(())
        } else {
            Err(Error::IncompatibleType)
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, Error> {
        value.as_bool().ok_or(Error::IncompatibleType)
    }
}

// Integer extraction is width-checked: any integer alternative converts to
// any native width that can hold the value, a lossy narrowing is an
// overflow, and a non-integer is a category mismatch.
macro_rules! from_value_int {
    ($($ty:ty),* $(,)?) => {
        $(impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self, Error> {
                match value {
                    Value::Integer(v) => <$ty>::try_from(*v).map_err(|_| Error::NumericOverflow),
                    Value::Unsigned(v) => <$ty>::try_from(*v).map_err(|_| Error::NumericOverflow),
                    _ => Err(Error::IncompatibleType),
                }
            }
        })*
    };
}

from_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromValue for f64 {
    /// Integers promote to real on extraction, mirroring the arithmetic
    /// promotion rule.
    fn from_value(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Integer(v) => Ok(*v as f64),
            Value::Unsigned(v) => Ok(*v as f64),
            Value::Real(v) => Ok(*v),
            _ => Err(Error::IncompatibleType),
        }
    }
}

impl FromValue for f32 {
    /// Narrowing to a shorter real is inherent to reals and never reported
    /// as overflow.
    fn from_value(value: &Value) -> Result<Self, Error> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, Error> {
        value.as_str().map(str::to_owned).ok_or(Error::IncompatibleType)
    }
}

impl FromValue for char {
    fn from_value(value: &Value) -> Result<Self, Error> {
        let text = value.as_str().ok_or(Error::IncompatibleType)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Err(Error::IncompatibleType),
        }
    }
}

impl FromValue for Vec<Value> {
    fn from_value(value: &Value) -> Result<Self, Error> {
        value.as_sequence().cloned().ok_or(Error::IncompatibleType)
    }
}

impl FromValue for BTreeMap<Value, Value> {
    fn from_value(value: &Value) -> Result<Self, Error> {
        value.as_mapping().cloned().ok_or(Error::IncompatibleType)
    }
}

macro_rules! try_from_value {
    ($($ty:ty),* $(,)?) => {
        $(impl TryFrom<&Value> for $ty {
            type Error = Error;

            #[inline(always)]
            fn try_from(value: &Value) -> Result<Self, Error> {
                <$ty>::from_value(value)
            }
        })*
    };
}

try_from_value!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, char);

/// The numeric category seen as one type: the view that promotion-sensitive
/// operations (the ordering relation, addition) work on, so the pairwise
/// promotion rules live in one place.
#[derive(Debug, Clone, Copy)]
pub enum NumberLike {
    Integer(i64),
    Unsigned(u64),
    Real(f64),
}

impl TryFrom<&Value> for NumberLike {
    type Error = Error;

    #[inline(always)]
    fn try_from(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Integer(v) => Ok(NumberLike::Integer(*v)),
            Value::Unsigned(v) => Ok(NumberLike::Unsigned(*v)),
            Value::Real(v) => Ok(NumberLike::Real(*v)),
            _ => Err(Error::IncompatibleType),
        }
    }
}

impl NumberLike {
    /// Total comparison across the numeric representations.
    ///
    /// Signed and unsigned integers widen through `i128`. Integer against
    /// real compares exactly (threshold check plus truncation) rather than
    /// through a cast to `f64`; the cast would collapse distinct integers
    /// above 2^53 and break transitivity of equality, which the mapping key
    /// invariant cannot survive. NaN compares equal to NaN and above every
    /// other number, giving the relation a total home for it.
    pub fn cmp_number(&self, other: &Self) -> Ordering {
        use NumberLike::*;
        match (*self, *other) {
            (Integer(a), Integer(b)) => a.cmp(&b),
            (Unsigned(a), Unsigned(b)) => a.cmp(&b),
            (Integer(a), Unsigned(b)) => (a as i128).cmp(&(b as i128)),
            (Unsigned(a), Integer(b)) => (a as i128).cmp(&(b as i128)),
            (Real(a), Real(b)) => cmp_real(a, b),
            (Integer(a), Real(b)) => cmp_integer_real(a as i128, b),
            (Unsigned(a), Real(b)) => cmp_integer_real(a as i128, b),
            (Real(a), Integer(b)) => cmp_integer_real(b as i128, a).reverse(),
            (Real(a), Unsigned(b)) => cmp_integer_real(b as i128, a).reverse(),
        }
    }

    /// Addition with numeric promotion: integer with integer stays integer
    /// (widening across signedness when the sum requires it), any real
    /// operand promotes the result to real. Integer overflow is reported,
    /// not wrapped.
    pub fn checked_add(self, other: Self) -> Result<Value, Error> {
        use NumberLike::*;
        match (self, other) {
            (Integer(a), Integer(b)) => {
                a.checked_add(b).map(Value::Integer).ok_or(Error::NumericOverflow)
            }
            (Unsigned(a), Unsigned(b)) => {
                a.checked_add(b).map(Value::Unsigned).ok_or(Error::NumericOverflow)
            }
            (Integer(a), Unsigned(b)) | (Unsigned(b), Integer(a)) => add_mixed(a, b),
            (Real(a), Real(b)) => Ok(Value::Real(a + b)),
            (Real(a), Integer(b)) | (Integer(b), Real(a)) => Ok(Value::Real(a + b as f64)),
            (Real(a), Unsigned(b)) | (Unsigned(b), Real(a)) => Ok(Value::Real(a + b as f64)),
        }
    }
}

/// Signed plus unsigned lands in whichever integer representation holds the
/// sum, signed preferred.
fn add_mixed(a: i64, b: u64) -> Result<Value, Error> {
    let sum = a as i128 + b as i128;
    if let Ok(v) = i64::try_from(sum) {
        Ok(Value::Integer(v))
    } else if let Ok(v) = u64::try_from(sum) {
        Ok(Value::Unsigned(v))
    } else {
        Err(Error::NumericOverflow)
    }
}

/// `partial_cmp` only fails on NaN; NaN sorts above everything and equal to
/// itself.
fn cmp_real(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Exact ordering of an integer (already widened to `i128`, which holds both
/// `i64` and `u64`) against a real.
fn cmp_integer_real(a: i128, b: f64) -> Ordering {
    if b.is_nan() {
        return Ordering::Less;
    }
    if b == f64::INFINITY {
        return Ordering::Less;
    }
    if b == f64::NEG_INFINITY {
        return Ordering::Greater;
    }
    let truncated = b.trunc();
    // i128::MAX as f64 rounds up to exactly 2^127; anything at or beyond it
    // is outside integer range on either side.
    if truncated >= i128::MAX as f64 {
        return Ordering::Less;
    }
    if truncated < i128::MIN as f64 {
        return Ordering::Greater;
    }
    // In range and integral, so the cast is exact.
    let whole = truncated as i128;
    match a.cmp(&whole) {
        Ordering::Equal => {
            let fraction = b - truncated;
            if fraction > 0.0 {
                Ordering::Less
            } else if fraction < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        ordering => ordering,
    }
}
