//! Element dispatch for composite values
//!
//! Every element of a pair goes through [`PairElement`]. The impl chosen for
//! the element's type decides its encoding at compile time:
//!
//! - the fixed-width integers of 16 bits and up are varints (signed widths
//!   bit-reinterpreted, see [`crate::varint`]);
//! - every other type is a [`Serialize`] type and runs its own routine.
//!
//! `usize` and `isize` are deliberately absent: their width depends on the
//! target, so they have no stable wire encoding.

use crate::ser::Serialize;
use crate::varint::VarintElement;
use archwire_archive::Archive;

/// How an element type is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementStrategy {
    /// Varint through the archive's primitive
    Varint {
        /// Bit-reinterpreted through the unsigned type of the same width
        signed: bool,
    },
    /// The type's own [`Serialize`] routine
    Recursive,
}

/// A value that can appear as an element of a pair
pub trait PairElement {
    /// Encoding selected for this type
    const STRATEGY: ElementStrategy;

    /// Serialize one element; the result is returned to the pair codec unchanged
    fn serialize_pair_element<A: Archive>(&mut self, ar: &mut A) -> bool;
}

impl<T: Serialize> PairElement for T {
    const STRATEGY: ElementStrategy = ElementStrategy::Recursive;

    fn serialize_pair_element<A: Archive>(&mut self, ar: &mut A) -> bool {
        self.serialize(ar)
    }
}

macro_rules! varint_pair_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PairElement for $ty {
                const STRATEGY: ElementStrategy = ElementStrategy::Varint {
                    signed: <$ty as VarintElement>::SIGNED,
                };

                fn serialize_pair_element<A: Archive>(&mut self, ar: &mut A) -> bool {
                    self.serialize_varint_element(ar)
                }
            }
        )*
    };
}

varint_pair_element!(u16, u32, u64, u128, i16, i32, i64, i128);

/// Strategy the dispatcher picks for `T`
pub const fn strategy_of<T: PairElement>() -> ElementStrategy {
    T::STRATEGY
}
