use std::hash::Hash;

use num_traits::{AsPrimitive, PrimInt, Unsigned};

pub mod macros;

/// Trait for types which can act as indices within an array (or an array-like structure).
///
/// Values are converted to and from `usize` at the edges of a container; anything wider than
/// `usize` is not an [ArrayIndex].
pub trait ArrayIndex:
    PrimInt + Unsigned + AsPrimitive<usize> + Hash + std::fmt::Debug + 'static
{
    /// Convert a `usize` into `Self`, if it fits.
    #[inline]
    fn from_usize(value: usize) -> Option<Self> {
        <Self as num_traits::NumCast>::from(value)
    }

    /// The position this index refers to.
    #[inline]
    fn index(self) -> usize {
        self.as_()
    }
}
impl<P> ArrayIndex for P where
    P: PrimInt + Unsigned + AsPrimitive<usize> + Hash + std::fmt::Debug + 'static
{
}
