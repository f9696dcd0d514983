use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut, Range};

use crate::convert::{FromValue, NumberLike};
use crate::error::Error;
use crate::iter::{Iter, IterMut, Keys};
use crate::kind::{Category, Kind};

/// A dynamically-typed value. Exactly one alternative is live at a time.
///
/// Sequences and mappings own their children deeply, so a value is always a
/// tree; no cycles are constructible. Mappings are keyed by values themselves,
/// sorted under the total order implemented in `cmp`.
///
/// Container alternatives should be built through [`Value::sequence`] and
/// [`Value::mapping`] rather than by naming the variants; the factories keep
/// the (key, value) intent explicit where a bare list of values would be
/// ambiguous.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The null value.
    #[default]
    Null,
    /// A boolean value (**true** or **false**).
    Boolean(bool),
    /// A signed integer value; every native signed width normalizes here.
    Integer(i64),
    /// An unsigned integer value; every native unsigned width normalizes here.
    Unsigned(u64),
    /// A floating-point value; every native real width normalizes here.
    Real(f64),
    /// An owned text value.
    Text(String),
    /// An ordered, growable sequence of values.
    Sequence(Vec<Value>),
    /// A key-sorted mapping from values to values, with unique keys.
    Mapping(BTreeMap<Value, Value>),
}

// The largest payloads are the three container headers (three words each).
static_assertions::const_assert!(std::mem::size_of::<Value>() <= 4 * std::mem::size_of::<usize>());

impl Value {
    /// Builds a sequence value from anything iterable.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Builds a mapping value from (key, value) pairs. A later duplicate key
    /// overwrites an earlier one.
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Compatibility path for single-list construction: builds a mapping iff
    /// the list is non-empty and every element is a two-element sequence
    /// (read as a (key, value) pair), otherwise a sequence.
    ///
    /// The heuristic is ambiguous by nature, since a sequence of two-element
    /// sequences is a legitimate sequence. New code should call
    /// [`Value::sequence`] or [`Value::mapping`] and say what it means.
    pub fn make(items: Vec<Value>) -> Self {
        let all_pairs = !items.is_empty() && items.iter().all(Value::is_pair);
        if !all_pairs {
            return Value::Sequence(items);
        }
        let mut entries = BTreeMap::new();
        for item in items {
            if let Value::Sequence(pair) = item {
                if let Ok([key, value]) = <[Value; 2]>::try_from(pair) {
                    entries.insert(key, value);
                }
            }
        }
        Value::Mapping(entries)
    }

    /// Whether this value has the shape of a (key, value) pair.
    fn is_pair(&self) -> bool {
        matches!(self, Value::Sequence(items) if items.len() == 2)
    }

    // Type queries

    /// Returns the fine classification of the live alternative.
    #[inline(always)]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Unsigned(_) => Kind::Unsigned,
            Value::Real(_) => Kind::Real,
            Value::Text(_) => Kind::Text,
            Value::Sequence(_) => Kind::Sequence,
            Value::Mapping(_) => Kind::Mapping,
        }
    }

    /// Returns the coarse classification of the live alternative.
    #[inline(always)]
    pub const fn category(&self) -> Category {
        self.kind().category()
    }

    /// Returns whether this value is null.
    #[inline(always)]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns whether this value is a boolean.
    #[inline(always)]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns whether this value is an integer, signed or unsigned.
    #[inline(always)]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Unsigned(_))
    }

    /// Returns whether this value is a real number.
    #[inline(always)]
    pub const fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    /// Returns whether this value is numeric: an integer or a real.
    #[inline(always)]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Unsigned(_) | Value::Real(_))
    }

    /// Returns whether this value is text.
    #[inline(always)]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns whether this value is a sequence.
    #[inline(always)]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Returns whether this value is a mapping.
    #[inline(always)]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    // Checked accessors

    /// Returns this value as a boolean, if such is its kind.
    #[inline(always)]
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Boolean(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// Returns this value as a signed integer, if such is its kind.
    #[inline(always)]
    pub fn as_i64(&self) -> Option<i64> {
        if let Value::Integer(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// Returns this value as an unsigned integer, if such is its kind.
    #[inline(always)]
    pub fn as_u64(&self) -> Option<u64> {
        if let Value::Unsigned(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// Returns this value as a real, if such is its kind.
    #[inline(always)]
    pub fn as_f64(&self) -> Option<f64> {
        if let Value::Real(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// Returns this value as a text slice, if such is its kind.
    #[inline(always)]
    pub fn as_str(&self) -> Option<&str> {
        if let Value::Text(v) = self {
            Some(v.as_str())
        } else {
            None
        }
    }

    /// Returns this value as a sequence, if such is its kind.
    #[inline(always)]
    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        if let Value::Sequence(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Returns this value as a mutable sequence, if such is its kind.
    #[inline(always)]
    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Value>> {
        if let Value::Sequence(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Returns this value as a mapping, if such is its kind.
    #[inline(always)]
    pub fn as_mapping(&self) -> Option<&BTreeMap<Value, Value>> {
        if let Value::Mapping(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Returns this value as a mutable mapping, if such is its kind.
    #[inline(always)]
    pub fn as_mapping_mut(&mut self) -> Option<&mut BTreeMap<Value, Value>> {
        if let Value::Mapping(v) = self {
            Some(v)
        } else {
            None
        }
    }

    // Unchecked accessors. The checked forms above are the normal path; these
    // exist for hot paths that have already matched on `kind()`.

    /// Returns the boolean without checking the live alternative.
    ///
    /// # Safety
    /// The caller must have verified `kind() == Kind::Boolean`.
    #[inline(always)]
    pub unsafe fn as_bool_unchecked(&self) -> bool {
        debug_assert!(self.is_boolean());
        match self {
            Value::Boolean(v) => *v,
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Returns the signed integer without checking the live alternative.
    ///
    /// # Safety
    /// The caller must have verified `kind() == Kind::Integer`.
    #[inline(always)]
    pub unsafe fn as_i64_unchecked(&self) -> i64 {
        debug_assert!(matches!(self, Value::Integer(_)));
        match self {
            Value::Integer(v) => *v,
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Returns the unsigned integer without checking the live alternative.
    ///
    /// # Safety
    /// The caller must have verified `kind() == Kind::Unsigned`.
    #[inline(always)]
    pub unsafe fn as_u64_unchecked(&self) -> u64 {
        debug_assert!(matches!(self, Value::Unsigned(_)));
        match self {
            Value::Unsigned(v) => *v,
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Returns the real without checking the live alternative.
    ///
    /// # Safety
    /// The caller must have verified `kind() == Kind::Real`.
    #[inline(always)]
    pub unsafe fn as_f64_unchecked(&self) -> f64 {
        debug_assert!(self.is_real());
        match self {
            Value::Real(v) => *v,
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Returns the text slice without checking the live alternative.
    ///
    /// # Safety
    /// The caller must have verified `kind() == Kind::Text`.
    #[inline(always)]
    pub unsafe fn as_str_unchecked(&self) -> &str {
        debug_assert!(self.is_text());
        match self {
            Value::Text(v) => v.as_str(),
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Returns the sequence without checking the live alternative.
    ///
    /// # Safety
    /// The caller must have verified `kind() == Kind::Sequence`.
    #[inline(always)]
    pub unsafe fn as_sequence_unchecked(&self) -> &Vec<Value> {
        debug_assert!(self.is_sequence());
        match self {
            Value::Sequence(v) => v,
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Returns the mutable sequence without checking the live alternative.
    ///
    /// # Safety
    /// The caller must have verified `kind() == Kind::Sequence`.
    #[inline(always)]
    pub unsafe fn as_sequence_unchecked_mut(&mut self) -> &mut Vec<Value> {
        debug_assert!(self.is_sequence());
        match self {
            Value::Sequence(v) => v,
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Returns the mapping without checking the live alternative.
    ///
    /// # Safety
    /// The caller must have verified `kind() == Kind::Mapping`.
    #[inline(always)]
    pub unsafe fn as_mapping_unchecked(&self) -> &BTreeMap<Value, Value> {
        debug_assert!(self.is_mapping());
        match self {
            Value::Mapping(v) => v,
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Returns the mutable mapping without checking the live alternative.
    ///
    /// # Safety
    /// The caller must have verified `kind() == Kind::Mapping`.
    #[inline(always)]
    pub unsafe fn as_mapping_unchecked_mut(&mut self) -> &mut BTreeMap<Value, Value> {
        debug_assert!(self.is_mapping());
        match self {
            Value::Mapping(v) => v,
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    // Extraction

    /// Extracts this value as `T` through the conversion framework.
    ///
    /// `T` is the "tag type" selecting the extraction logic; the built-in
    /// impls of [`FromValue`] cover the native scalars, `String`, `char`, and
    /// the container types, and external adapters plug in by implementing
    /// [`FromValue`] for their own types.
    #[inline]
    pub fn value<T: FromValue>(&self) -> Result<T, Error> {
        T::from_value(self)
    }

    // Capacity

    /// Returns whether this value is empty: null, or text/sequence/mapping
    /// content with no elements. Scalars are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(_) | Value::Integer(_) | Value::Unsigned(_) | Value::Real(_) => false,
            Value::Text(v) => v.is_empty(),
            Value::Sequence(v) => v.is_empty(),
            Value::Mapping(v) => v.is_empty(),
        }
    }

    /// Returns the number of contained elements: 0 for null, 1 for scalars,
    /// the code-unit length for text, the element or entry count for
    /// containers.
    pub fn len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Boolean(_) | Value::Integer(_) | Value::Unsigned(_) | Value::Real(_) => 1,
            Value::Text(v) => v.len(),
            Value::Sequence(v) => v.len(),
            Value::Mapping(v) => v.len(),
        }
    }

    // Positional access

    /// Returns the element at `index` of a sequence.
    ///
    /// A non-sequence reports [`Error::IncompatibleType`]; an index past the
    /// end reports [`Error::OutOfRange`] (the immutable view never grows).
    pub fn at(&self, index: usize) -> Result<&Value, Error> {
        match self {
            Value::Sequence(items) => items.get(index).ok_or(Error::OutOfRange),
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Returns the element at `index` of a sequence, growing the sequence
    /// with null fill when `index` is past the end (array semantics).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value, Error> {
        match self {
            Value::Sequence(items) => {
                if index >= items.len() {
                    items.resize_with(index + 1, || Value::Null);
                }
                Ok(&mut items[index])
            }
            _ => Err(Error::IncompatibleType),
        }
    }

    // Keyed access

    /// Returns the value under `key` in a mapping, inserting a null entry for
    /// an absent key. A null target first promotes itself to an empty
    /// mapping, so a fresh value can be written to as a mapping directly; any
    /// other alternative reports [`Error::IncompatibleType`].
    pub fn entry<K: Into<Value>>(&mut self, key: K) -> Result<&mut Value, Error> {
        if self.is_null() {
            *self = Value::Mapping(BTreeMap::new());
        }
        match self {
            Value::Mapping(entries) => Ok(entries.entry(key.into()).or_insert(Value::Null)),
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Returns the value under `key` in a mapping. An absent key reports
    /// [`Error::OutOfRange`]; a non-mapping reports
    /// [`Error::IncompatibleType`].
    pub fn at_key<K: Into<Value>>(&self, key: K) -> Result<&Value, Error> {
        match self {
            Value::Mapping(entries) => entries.get(&key.into()).ok_or(Error::OutOfRange),
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Looks up `key` in a mapping. A non-mapping probes as "not found"
    /// rather than failing, so callers can ask type-agnostically.
    pub fn find<K: Into<Value>>(&self, key: K) -> Option<&Value> {
        match self {
            Value::Mapping(entries) => entries.get(&key.into()),
            _ => None,
        }
    }

    /// Looks up `key` in a mapping, mutably. A non-mapping probes as "not
    /// found".
    pub fn find_mut<K: Into<Value>>(&mut self, key: K) -> Option<&mut Value> {
        match self {
            Value::Mapping(entries) => entries.get_mut(&key.into()),
            _ => None,
        }
    }

    /// Returns the number of mapping entries whose key compares equal to
    /// `key` under the ordering relation: 0 or 1, and always 0 on a
    /// non-mapping.
    pub fn count<K: Into<Value>>(&self, key: K) -> usize {
        self.find(key).map_or(0, |_| 1)
    }

    // Modifiers

    /// Appends `value` to a sequence.
    pub fn push<T: Into<Value>>(&mut self, value: T) -> Result<(), Error> {
        match self {
            Value::Sequence(items) => {
                items.push(value.into());
                Ok(())
            }
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Inserts `value` at `index` of a sequence, shifting later elements.
    /// `index == len` appends; past that is [`Error::OutOfRange`].
    pub fn insert_at<T: Into<Value>>(&mut self, index: usize, value: T) -> Result<(), Error> {
        match self {
            Value::Sequence(items) => {
                if index > items.len() {
                    return Err(Error::OutOfRange);
                }
                items.insert(index, value.into());
                Ok(())
            }
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Inserts a (key, value) entry into a mapping under the overwrite
    /// policy; returns the displaced value, if any.
    pub fn insert_entry<K, V>(&mut self, key: K, value: V) -> Result<Option<Value>, Error>
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        match self {
            Value::Mapping(entries) => Ok(entries.insert(key.into(), value.into())),
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Inserts a (key, value) entry into a mapping under the reject policy:
    /// a key already present under the ordering relation reports
    /// [`Error::InvalidKey`] and leaves the mapping unchanged.
    pub fn insert_unique<K, V>(&mut self, key: K, value: V) -> Result<(), Error>
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        match self {
            Value::Mapping(entries) => {
                let key = key.into();
                if entries.contains_key(&key) {
                    return Err(Error::InvalidKey);
                }
                entries.insert(key, value.into());
                Ok(())
            }
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Removes and returns the element at `index` of a sequence. Later
    /// elements shift down, preserving their relative order.
    pub fn remove_at(&mut self, index: usize) -> Result<Value, Error> {
        match self {
            Value::Sequence(items) => {
                if index >= items.len() {
                    return Err(Error::OutOfRange);
                }
                Ok(items.remove(index))
            }
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Removes a range of elements from a sequence, returning them in order.
    pub fn remove_range(&mut self, range: Range<usize>) -> Result<Vec<Value>, Error> {
        match self {
            Value::Sequence(items) => {
                if range.start > range.end || range.end > items.len() {
                    return Err(Error::OutOfRange);
                }
                Ok(items.drain(range).collect())
            }
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Removes `key` from a mapping, returning the value it mapped to.
    pub fn remove_key<K: Into<Value>>(&mut self, key: K) -> Result<Option<Value>, Error> {
        match self {
            Value::Mapping(entries) => Ok(entries.remove(&key.into())),
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Resets to an empty (or zero) instance of the *same* alternative; the
    /// live kind never changes.
    pub fn clear(&mut self) {
        match self {
            Value::Null => {}
            Value::Boolean(v) => *v = false,
            Value::Integer(v) => *v = 0,
            Value::Unsigned(v) => *v = 0,
            Value::Real(v) => *v = 0.0,
            Value::Text(v) => v.clear(),
            Value::Sequence(v) => v.clear(),
            Value::Mapping(v) => v.clear(),
        }
    }

    /// Moves the content out, leaving null behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    // Addition / concatenation

    /// Adds or concatenates two values: numerics add with promotion
    /// (integer with integer widens, integer with real promotes to real),
    /// text and sequences concatenate, and null is the identity element on
    /// either side. Every other combination, mapping with mapping included,
    /// reports [`Error::IncompatibleType`]. Signed overflow reports
    /// [`Error::NumericOverflow`].
    pub fn try_add(&self, other: &Value) -> Result<Value, Error> {
        match (self, other) {
            (Value::Null, _) => Ok(other.clone()),
            (_, Value::Null) => Ok(self.clone()),
            (Value::Text(a), Value::Text(b)) => {
                let mut out = a.clone();
                out.push_str(b);
                Ok(Value::Text(out))
            }
            (Value::Sequence(a), Value::Sequence(b)) => {
                let mut out = a.clone();
                out.extend(b.iter().cloned());
                Ok(Value::Sequence(out))
            }
            _ => {
                let a = NumberLike::try_from(self)?;
                let b = NumberLike::try_from(other)?;
                a.checked_add(b)
            }
        }
    }

    /// In-place form of [`Value::try_add`]. On failure the target is left
    /// unchanged.
    pub fn try_add_assign(&mut self, other: &Value) -> Result<(), Error> {
        *self = self.try_add(other)?;
        Ok(())
    }

    // Iteration

    /// Iterates the contents: sequence elements in order, mapping values in
    /// key order, a scalar exactly once over itself, null not at all.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Mutable form of [`Value::iter`]. Mapping keys are not reachable
    /// mutably; only the mapped values are.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(self)
    }

    /// Iterates the keys: mapping keys in key order, or synthesized
    /// positional indices for a sequence or scalar, so positional and
    /// associative iteration share one vocabulary.
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self)
    }
}

// Construction from native scalars. Widths normalize on entry; `same`-ness
// is a property of [`Kind`], not of the width the value arrived as.

macro_rules! from_signed {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for Value {
            #[inline(always)]
            fn from(value: $ty) -> Self {
                Value::Integer(value as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for Value {
            #[inline(always)]
            fn from(value: $ty) -> Self {
                Value::Unsigned(value as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<()> for Value {
    #[inline(always)]
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    #[inline(always)]
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f32> for Value {
    #[inline(always)]
    fn from(value: f32) -> Self {
        Value::Real(value as f64)
    }
}

impl From<f64> for Value {
    #[inline(always)]
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<&str> for Value {
    #[inline(always)]
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline(always)]
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<char> for Value {
    #[inline(always)]
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<&Value> for Value {
    #[inline(always)]
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

// Indexing sugar. The checked forms are `at`/`at_mut`; these panic on
// misuse, like the std containers they mirror.

impl Index<usize> for Value {
    type Output = Value;

    /// Panics when the value is not a sequence or `index` is out of range;
    /// use [`Value::at`] for the checked form.
    fn index(&self, index: usize) -> &Value {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("cannot index {:?} with {}: {}", self.kind(), index, err),
        }
    }
}

impl IndexMut<usize> for Value {
    /// Grows a sequence on out-of-range access; panics on a non-sequence.
    fn index_mut(&mut self, index: usize) -> &mut Value {
        let kind = self.kind();
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("cannot index {:?} with {}: {}", kind, index, err),
        }
    }
}

impl<'a> IntoIterator for &'a Value {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Value {
    type Item = &'a mut Value;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> {
        self.iter_mut()
    }
}

impl fmt::Display for Value {
    /// A compact human-readable rendering for diagnostics; not a wire
    /// format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Unsigned(v) => write!(f, "{}", v),
            Value::Real(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "\"{}\"", v),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (nth, item) in items.iter().enumerate() {
                    if nth > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Mapping(entries) => {
                f.write_str("{")?;
                for (nth, (key, value)) in entries.iter().enumerate() {
                    if nth > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}
