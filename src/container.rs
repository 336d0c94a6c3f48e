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
//! A sequence of bits which owns its word storage.
use crate::result::Result;
use bit_lens_core::{BitLens, ResizeWords, WordContainer, WordContainerMut};
use std::iter::FromIterator;
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, Deref, DerefMut, Not};

/// Bits stored in a word container owned by this value.
///
/// All of the operations of [`BitLens`] are available through deref.
/// Cloning clones the storage, and the view of the clone refers to the new
/// storage only. Moving keeps the view bound to the moved storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "C: serde::Serialize", deserialize = "C: serde::Deserialize<'de>"))]
pub struct BitContainer<C> {
    #[serde(with = "store")]
    bits: BitLens<C>,
}

/// Serialize just the word storage.
mod store {
    use bit_lens_core::BitLens;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<C, S>(bits: &BitLens<C>, serializer: S) -> Result<S::Ok, S::Error>
    where
        C: Serialize,
        S: Serializer,
    {
        bits.data().serialize(serializer)
    }

    pub fn deserialize<'de, C, D>(deserializer: D) -> Result<BitLens<C>, D::Error>
    where
        C: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        C::deserialize(deserializer).map(BitLens::new)
    }
}

impl<C> BitContainer<C> {
    /// Take ownership of existing words.
    #[inline]
    pub fn from_store(store: C) -> Self {
        BitContainer {
            bits: BitLens::new(store),
        }
    }

    #[inline]
    pub fn data(&self) -> &C {
        self.bits.data()
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut C {
        self.bits.data_mut()
    }

    /// Give up the bit view and get the storage back.
    #[inline]
    pub fn into_data(self) -> C {
        self.bits.into_inner()
    }
}

impl<C: ResizeWords + Default> BitContainer<C> {
    /// An empty container.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A container holding at least `len_bits` bits, all set to `fill`.
    pub fn with_bits(len_bits: usize, fill: bool) -> Self {
        let mut container = Self::new();
        container.resize(len_bits, fill);
        container
    }

    /// Like [`with_bits`](Self::with_bits), but fails instead of aborting
    /// if the storage can't be allocated.
    pub fn try_with_bits(len_bits: usize, fill: bool) -> Result<Self> {
        let mut container = Self::new();
        if let Err(err) = container.try_resize(len_bits, fill) {
            #[cfg(feature = "tracing")]
            tracing::warn!(len_bits, "failed to allocate bit storage");
            return Err(err.into());
        }
        Ok(container)
    }
}

impl<C> From<C> for BitContainer<C> {
    #[inline]
    fn from(store: C) -> Self {
        Self::from_store(store)
    }
}

impl<C> Deref for BitContainer<C> {
    type Target = BitLens<C>;

    #[inline]
    fn deref(&self) -> &BitLens<C> {
        &self.bits
    }
}

impl<C> DerefMut for BitContainer<C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut BitLens<C> {
        &mut self.bits
    }
}

impl<C: ResizeWords + Default> FromIterator<bool> for BitContainer<C> {
    /// Collect bits into a new container.
    ///
    /// The container is rounded up to whole words, the extra bits are unset.
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut container = Self::new();
        container.resize(iter.size_hint().0, false);
        for (idx, bit) in iter.enumerate() {
            if idx >= container.len() {
                container.resize(idx + 1, false);
            }
            container.set(idx, bit);
        }
        container
    }
}

impl<'a, C, D> BitAndAssign<&'a BitContainer<D>> for BitContainer<C>
where
    C: WordContainerMut,
    D: WordContainer<Word = C::Word>,
{
    fn bitand_assign(&mut self, other: &'a BitContainer<D>) {
        self.bits.and_with(&other.bits)
    }
}

impl<'a, C, D> BitOrAssign<&'a BitContainer<D>> for BitContainer<C>
where
    C: WordContainerMut,
    D: WordContainer<Word = C::Word>,
{
    fn bitor_assign(&mut self, other: &'a BitContainer<D>) {
        self.bits.or_with(&other.bits)
    }
}

impl<'a, C, D> BitXorAssign<&'a BitContainer<D>> for BitContainer<C>
where
    C: WordContainerMut,
    D: WordContainer<Word = C::Word>,
{
    fn bitxor_assign(&mut self, other: &'a BitContainer<D>) {
        self.bits.xor_with(&other.bits)
    }
}

impl<C: WordContainerMut> Not for BitContainer<C> {
    type Output = Self;

    fn not(mut self) -> Self {
        self.bits.negate();
        self
    }
}

#[cfg(feature = "implement_heapsize")]
impl<C: heapsize::HeapSizeOf> heapsize::HeapSizeOf for BitContainer<C> {
    fn heap_size_of_children(&self) -> usize {
        self.data().heap_size_of_children()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bit_lens_core::{ceil_div_usize, Word};
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;
    use std::collections::VecDeque;

    macro_rules! container_tests {
        ($name:ident, $store:ty, $word_type:ty) => {
            mod $name {
                use super::*;

                #[test]
                fn test_resize_fill() {
                    let mut container: BitContainer<$store> = BitContainer::new();
                    assert!(container.is_empty());
                    container.resize(1000, true);
                    assert!(container.len() >= 1000);
                    assert_eq!(
                        container.data().len(),
                        ceil_div_usize(container.len(), <$word_type as Word>::BITS)
                    );
                    assert!(container[0]);
                    assert!(container[container.len() - 1]);
                    assert_eq!(container.count_zeros(), 0);
                }

                #[test]
                fn test_clone_is_independent() {
                    let mut original: BitContainer<$store> = BitContainer::with_bits(100, false);
                    original.set(3, true);
                    let mut copy = original.clone();
                    assert_eq!(copy, original);
                    copy.set(3, false);
                    copy.set(99, true);
                    assert!(original[3]);
                    assert!(!original[99]);
                    assert!(!copy[3]);
                    assert!(copy[99]);
                }

                #[test]
                fn test_move_keeps_bits() {
                    let mut original: BitContainer<$store> = BitContainer::with_bits(64, false);
                    original.set(10, true);
                    let moved = original;
                    let boxed = Box::new(moved);
                    assert!(boxed[10]);
                    assert_eq!(boxed.count_ones(), 1);
                }
            }
        };
    }

    container_tests!(vec_u8, Vec<u8>, u8);
    container_tests!(vec_usize, Vec<usize>, usize);
    container_tests!(deque_usize, VecDeque<usize>, usize);

    #[test]
    fn test_from_store_and_back() {
        let container = BitContainer::from(vec![0b0000_0110u8]);
        assert_eq!(container.len(), 8);
        assert_eq!(container.iter().take(3).collect::<Vec<_>>(), vec![false, true, true]);
        assert_eq!(container.into_data(), vec![0b0000_0110]);
    }

    #[test]
    fn test_data_mut_bulk_access() {
        let mut container: BitContainer<Vec<u8>> = BitContainer::with_bits(16, true);
        for word in container.data_mut().iter_mut() {
            *word &= 0b1101;
        }
        assert!(!container[1]);
        assert!(container[2]);
        assert_eq!(container.count_ones(), 6);
    }

    #[test]
    fn test_from_iter() {
        let bits = vec![true, false, false, true, true, false, true, false, true];
        let container: BitContainer<Vec<u8>> = bits.iter().cloned().collect();
        assert_eq!(container.len(), 16);
        assert_eq!(container.data(), &vec![0b0101_1001, 0b0000_0001]);

        // An iterator without a useful size hint
        let container: BitContainer<Vec<u32>> =
            bits.iter().cloned().filter(|_| true).collect();
        assert_eq!(container.data(), &vec![0b1_0101_1001]);
    }

    #[test]
    fn test_bulk_operators() {
        let mut a = BitContainer::from(vec![0b1010u8, 0xff]);
        let b = BitContainer::from(vec![0b1100u8]);
        a |= &b;
        assert_eq!(a.data(), &vec![0b1110, 0xff]);
        a ^= &b;
        assert_eq!(a.data(), &vec![0b0010, 0xff]);
        a &= &b;
        assert_eq!(a.data(), &vec![0, 0]);
        let a = !a;
        assert_eq!(a.count_zeros(), 0);
    }

    #[test]
    fn test_try_with_bits() {
        let container = BitContainer::<Vec<u16>>::try_with_bits(33, true);
        assert_eq!(container.map(|c| c.len()), Ok(48));

        let error = BitContainer::<Vec<u64>>::try_with_bits(usize::max_value(), false);
        match error {
            Err(crate::Error::Resize(_)) => (),
            Ok(_) => panic!("Allocating usize::MAX bits should fail"),
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        let words: Vec<u32> = (0..17).map(|_| rng.gen()).collect();
        let container = BitContainer::from(words.clone());

        // The encoding is exactly the encoding of the storage
        let encoded = bincode::serialize(&container).unwrap();
        assert_eq!(encoded, bincode::serialize(&words).unwrap());

        let decoded: BitContainer<Vec<u32>> = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, container);
    }

    #[test]
    fn test_random_difference() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        let a: BitContainer<Vec<u8>> = (0..1000).map(|_| rng.gen::<bool>()).collect();
        let b: BitContainer<Vec<u8>> = (0..1000).map(|_| rng.gen::<bool>()).collect();

        let mut bitwise: BitContainer<Vec<u8>> = BitContainer::with_bits(a.len(), false);
        for _ in 0..5000 {
            let i = rng.gen_range(0, a.len());
            bitwise.set(i, a[i] && !b[i]);
        }
        for i in 0..a.len() {
            if bitwise[i] {
                assert!(a[i] && !b[i]);
            }
        }

        let mut by_words = a.clone();
        by_words.difference_with(&b);
        for i in 0..a.len() {
            assert_eq!(by_words[i], a[i] && !b[i], "Bit {} was wrong", i);
        }
    }

    quickcheck! {
        fn prop_collect_keeps_bits(bits: Vec<bool>) -> bool {
            let container: BitContainer<Vec<u16>> = bits.iter().cloned().collect();
            container.len() == ceil_div_usize(bits.len(), 16) * 16
                && bits.iter().enumerate().all(|(i, &bit)| container[i] == bit)
                && container.iter().skip(bits.len()).all(|bit| !bit)
        }
    }

    proptest! {
        #[test]
        fn test_negate_twice(words in proptest::collection::vec(any::<u64>(), 0..8)) {
            let container = BitContainer::from(words.clone());
            let ones = container.count_ones();
            let negated = !container;
            prop_assert_eq!(negated.count_zeros(), ones);
            prop_assert_eq!((!negated).into_data(), words);
        }
    }
}
