/*
   Copyright 2020 DarkOtter

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/
//! Tools for working with a single unsigned integer word as bits.
//!
//! Bits within a word are numbered from the least significant bit,
//! so offset `0` is the bit with value `1`.
use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not};

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for u128 {}
    impl Sealed for usize {}
}

/// An unsigned integer type which can store packed bits.
///
/// This trait is sealed: only the unsigned primitive integers implement it,
/// so signed or non-integer words are rejected when the code is compiled.
pub trait Word:
    Copy
    + Eq
    + Hash
    + Debug
    + Default
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + private::Sealed
{
    /// The number of bits in one word.
    const BITS: usize;

    /// The word where all bits are zero.
    const ZEROS: Self;

    /// The word where all bits are one.
    const ONES: Self;

    /// Get a single bit by its offset from the least significant bit.
    ///
    /// The offset must be less than `Self::BITS`.
    fn bit(self, offset: usize) -> bool;

    /// Set a single bit by creating a new word, leaving every other bit as it was.
    ///
    /// The offset must be less than `Self::BITS`.
    fn with_bit(self, offset: usize, value: bool) -> Self;

    /// Count the set bits.
    fn count_ones(self) -> u32;

    /// The word with every bit equal to `value`.
    #[inline]
    fn fill_pattern(value: bool) -> Self {
        if value {
            Self::ONES
        } else {
            Self::ZEROS
        }
    }
}

macro_rules! implement_word {
    ($word_type:ty) => {
        impl Word for $word_type {
            const BITS: usize = <$word_type>::BITS as usize;
            const ZEROS: Self = 0;
            const ONES: Self = !0;

            #[inline]
            fn bit(self, offset: usize) -> bool {
                debug_assert!(offset < <Self as Word>::BITS, "Bit offset out of range");
                (self >> offset) & 1 != 0
            }

            #[inline]
            fn with_bit(self, offset: usize, value: bool) -> Self {
                debug_assert!(offset < <Self as Word>::BITS, "Bit offset out of range");
                (self & !((1 as $word_type) << offset)) | ((value as $word_type) << offset)
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$word_type>::count_ones(self)
            }
        }
    };
}

implement_word!(u8);
implement_word!(u16);
implement_word!(u32);
implement_word!(u64);
implement_word!(u128);
implement_word!(usize);

/// Split a bit index into the index of its word and its offset in that word.
#[inline]
pub fn split_index<W: Word>(idx_bits: usize) -> (usize, usize) {
    (idx_bits / W::BITS, idx_bits % W::BITS)
}
