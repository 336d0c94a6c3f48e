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
//! Core types to address the bits of a word container one at a time,
//! without copying the words out of the container.
#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate rand_xorshift;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

#[cfg(test)]
extern crate proptest;

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

#[cold]
const fn ceil_div_usize_slow(n: usize, d: usize) -> usize {
    n / d + ((n % d > 0) as usize)
}

/// Divide rounding up, used to turn a bit count into a word count.
#[inline(always)]
pub fn ceil_div_usize(n: usize, d: usize) -> usize {
    let nb = n.wrapping_add(d - 1);
    if nb < n {
        return ceil_div_usize_slow(n, d);
    };
    nb / d
}

pub mod word;
pub use crate::word::{split_index, Word};

pub mod container;
pub use crate::container::{ResizeWords, WordContainer, WordContainerMut};

pub mod bit_ref;
pub use crate::bit_ref::BitRef;

pub mod cursor;
pub use crate::cursor::{BitCursor, BitIter, BitSource, CellWords, Iter, IterMut};

pub mod lens;
#[allow(deprecated)]
pub use crate::lens::{BitLens, Lens};

pub use alloc::collections::TryReserveError;
