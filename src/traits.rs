use std::{fmt::Display, str::FromStr};

use tmdump_common::item_with;

/// Trait for floating-point types, so that other things can be generic over {f32, f64} without
/// having to use [weird macros](tmdump_common::item_with).
///
/// Anything read from or written to a dump goes through [FromStr] and [Display], so those are
/// part of the bound.
pub trait Float:
    num_traits::Float
    + nalgebra::Scalar
    + nalgebra::SimdPartialOrd
    + FromStr
    + Display
    + std::ops::AddAssign
    + std::ops::SubAssign
    + Copy
    + Send
    + Sync
{
    const TWO: Self;
}

// this macro lets us impl Float for both f32 and f64 without having to copy/paste,
// but it feels very goofy
item_with! {Real: f32, f64 => impl Float for Real {
    const TWO: Self = 2.0;
}}
