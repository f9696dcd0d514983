/// The fine-grained classification of a live alternative.
///
/// This is the discriminant external codecs switch on to pick a wire
/// representation, and the granularity at which two values count as having
/// the *same* type. Width is not part of it: every native integer and real
/// width normalizes to one storage representation on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Unsigned,
    Real,
    Text,
    Sequence,
    Mapping,
}

/// The coarse classification of a live alternative.
///
/// Declaration order is the cross-type precedence used by the total order
/// over values: `Null < Boolean < Numeric < Text < Sequence < Mapping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    Null,
    Boolean,
    Numeric,
    Text,
    Sequence,
    Mapping,
}

impl Kind {
    /// Returns the coarse category this kind belongs to.
    #[inline(always)]
    pub const fn category(self) -> Category {
        match self {
            Kind::Null => Category::Null,
            Kind::Boolean => Category::Boolean,
            Kind::Integer | Kind::Unsigned | Kind::Real => Category::Numeric,
            Kind::Text => Category::Text,
            Kind::Sequence => Category::Sequence,
            Kind::Mapping => Category::Mapping,
        }
    }
}
