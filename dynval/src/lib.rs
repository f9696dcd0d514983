//!
//! Dynamically-typed values with value semantics: a single [`Value`] type that
//! holds null, boolean, integer, real, text, sequence, or mapping content,
//! switchable at runtime. Mappings use values as their own keys, so a total
//! order over every representable value comes with the type.
//!
//! This is the in-memory representation wire codecs encode from and decode
//! into; the codecs themselves live elsewhere and only consume the public
//! surface (construction, classification, iteration, extraction).
//!

/// To convert values to types, and vice versa.
pub mod convert;
/// The failure taxonomy shared by every fallible operation.
pub mod error;
/// Forward iteration over sequences, mappings, and scalars alike.
pub mod iter;
/// Classification of the live alternative.
pub mod kind;
/// The value representation itself.
pub mod value;

mod cmp;

pub use crate::convert::{FromValue, NumberLike};
pub use crate::error::Error;
pub use crate::iter::{Iter, IterMut, Keys};
pub use crate::kind::{Category, Kind};
pub use crate::value::Value;
