use thiserror::Error;

/// Failure raised by the fallible surface of [`Value`](crate::value::Value).
///
/// Every mutating operation and every checked extraction reports through this
/// closed set, and leaves the value untouched when it fails. Precondition
/// violations (the `unsafe` unchecked accessors) are contract violations, not
/// errors, and are never reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The requested operation or extraction does not apply to the live
    /// alternative.
    #[error("incompatible type")]
    IncompatibleType,
    /// Positional or keyed access beyond the valid bounds of a non-growing
    /// target.
    #[error("out of range")]
    OutOfRange,
    /// A mapping insert under the reject policy hit an already-present key.
    #[error("invalid key")]
    InvalidKey,
    /// Arithmetic or a narrowing extraction would lose the value.
    #[error("numeric overflow")]
    NumericOverflow,
}
