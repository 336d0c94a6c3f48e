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
//! Address the bits of a container of words one at a time.
//!
//! ```
//! use bit_lens::BitLens;
//!
//! let mut words: Vec<u8> = Vec::new();
//! let mut bits = BitLens::new(&mut words);
//! bits.resize(10, false);
//! assert_eq!(bits.len(), 16);
//! bits.set(8, true);
//! assert!(bits[8]);
//! assert_eq!(words, vec![0, 1]);
//! ```

extern crate serde;
#[macro_use]
extern crate serde_derive;

extern crate bit_lens_core;

#[cfg(feature = "implement_heapsize")]
extern crate heapsize;

#[cfg(test)]
extern crate proptest;
#[cfg(test)]
#[macro_use]
extern crate quickcheck;
#[cfg(test)]
extern crate bincode;
#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate rand_xorshift;

pub use bit_lens_core::{
    BitCursor, BitIter, BitLens, BitRef, BitSource, CellWords, Iter, IterMut, ResizeWords,
    TryReserveError, Word, WordContainer, WordContainerMut,
};
#[allow(deprecated)]
pub use bit_lens_core::Lens;

mod container;
pub use crate::container::BitContainer;

mod result;
pub use crate::result::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! readme_tests {
        ($name:ident, $word_type:ty) => {
            #[test]
            fn $name() {
                let mut container: Vec<$word_type> = Vec::new();
                let mut bits = BitLens::new(&mut container);
                bits.resize(10, false);
                assert!(bits.len() >= 10);
                assert_eq!(bits.len() % <$word_type as Word>::BITS, 0);
                assert!(!bits[8]);
                bits.set(8, true);
                assert!(bits[8]);

                for bit in bits.iter_mut() {
                    bit.write(true);
                }
                assert_eq!(bits.iter().filter(|&bit| bit).count(), bits.len());

                for word in bits.data_mut().iter_mut() {
                    *word &= 0b1101;
                }
                assert!(!container.is_empty());
                assert!(container.iter().all(|&word| word == 0b1101));
            }
        };
    }

    readme_tests!(test_readme_u8, u8);
    readme_tests!(test_readme_u16, u16);
    readme_tests!(test_readme_u32, u32);
    readme_tests!(test_readme_usize, usize);

    #[test]
    fn test_owned_and_borrowed_agree() {
        let words = vec![0x5au8, 0xc3, 0x0f];
        let owned = BitContainer::from(words.clone());
        let borrowed = BitLens::new(&words);
        assert!(owned.iter().eq(borrowed.iter()));
        assert_eq!(owned.count_ones(), borrowed.count_ones());
    }
}
