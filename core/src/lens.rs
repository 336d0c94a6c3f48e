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
//! A view of a word container as a sequence of bits.
//!
//! Bit `i` is bit `i % W::BITS` (counted from the least significant bit)
//! of word `i / W::BITS`. The number of bits is always a whole number of words.
use crate::bit_ref::BitRef;
use crate::ceil_div_usize;
use crate::container::{ResizeWords, WordContainer, WordContainerMut};
use crate::cursor::{BitCursor, BitIter, BitSource, CellWords, Iter, IterMut};
use crate::word::{split_index, Word};
use alloc::collections::TryReserveError;
use core::ops::{Index, Range};

/// Bits stored in a container of words.
///
/// The lens does not copy the words: wrap a `&mut Vec<u64>` to work on the
/// bits of a vector you own, a `&[u8]` to read the bits of a slice, or an owned
/// container to keep the storage inside the lens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitLens<C> {
    container: C,
}

/// Older name for [`BitLens`].
#[deprecated(note = "use `BitLens` instead")]
pub type Lens<C> = BitLens<C>;

impl<C> BitLens<C> {
    #[inline]
    pub const fn new(container: C) -> Self {
        BitLens { container }
    }

    /// The underlying container.
    #[inline]
    pub fn data(&self) -> &C {
        &self.container
    }

    /// The underlying container, for working on whole words at once.
    #[inline]
    pub fn data_mut(&mut self) -> &mut C {
        &mut self.container
    }

    #[inline]
    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<C: WordContainer> BitLens<C> {
    /// The number of bits in one word of the container.
    pub const WORD_SIZE: usize = <C::Word as Word>::BITS;

    /// The number of bits which fit in the container.
    ///
    /// This is always a multiple of `WORD_SIZE`.
    #[inline]
    pub fn len(&self) -> usize {
        self.container.len_words() * Self::WORD_SIZE
    }

    #[inline]
    pub fn len_words(&self) -> usize {
        self.container.len_words()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.container.len_words() == 0
    }

    #[inline]
    fn read_bit(&self, idx_bits: usize) -> bool {
        let (word_idx, offset) = split_index::<C::Word>(idx_bits);
        self.container.word(word_idx).bit(offset)
    }

    /// Get a single bit.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, idx_bits: usize) -> Option<bool> {
        if idx_bits < self.len() {
            Some(self.read_bit(idx_bits))
        } else {
            None
        }
    }

    /// Cursor at the first bit.
    #[inline]
    pub fn begin(&self) -> BitCursor<&C> {
        BitCursor::new(&self.container, 0)
    }

    /// Cursor one past the last bit.
    #[inline]
    pub fn end(&self) -> BitCursor<&C> {
        BitCursor::new(&self.container, self.len())
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, C> {
        BitIter::new(self.begin(), self.end())
    }

    /// Call `f(bit, index)` for every bit in ascending order.
    ///
    /// Each word is read from the container once.
    pub fn for_each<F: FnMut(bool, usize)>(&self, mut f: F) {
        for word_idx in 0..self.container.len_words() {
            let word = self.container.word(word_idx);
            let base = word_idx * Self::WORD_SIZE;
            for offset in 0..Self::WORD_SIZE {
                f(word.bit(offset), base + offset);
            }
        }
    }

    /// Count the set bits.
    pub fn count_ones(&self) -> usize {
        (0..self.container.len_words())
            .map(|idx| self.container.word(idx).count_ones() as usize)
            .sum::<usize>()
    }

    /// Count the unset bits.
    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }
}

impl<C: WordContainer> Index<usize> for BitLens<C> {
    type Output = bool;

    /// Panics if the index is out of bounds.
    fn index(&self, idx_bits: usize) -> &bool {
        if self.read_bit(idx_bits) {
            &true
        } else {
            &false
        }
    }
}

impl<C: WordContainerMut> BitLens<C> {
    #[inline]
    fn cell_words(&mut self) -> CellWords<'_, C::Word> {
        CellWords::new(self.container.words_mut())
    }

    /// Get a reference to a single bit.
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn at_mut(&mut self, idx_bits: usize) -> BitRef<'_, C::Word> {
        let (word_idx, offset) = split_index::<C::Word>(idx_bits);
        BitRef::from_mut(self.container.word_mut(word_idx), offset)
    }

    /// Get a reference to a single bit.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, idx_bits: usize) -> Option<BitRef<'_, C::Word>> {
        if idx_bits < self.len() {
            Some(self.at_mut(idx_bits))
        } else {
            None
        }
    }

    /// Set a single bit.
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn set(&mut self, idx_bits: usize, to: bool) {
        self.at_mut(idx_bits).write(to)
    }

    /// Set a single bit, returning the previous value.
    ///
    /// Returns `None` (and makes no change) if the index is out of bounds.
    #[inline]
    pub fn replace(&mut self, idx_bits: usize, with: bool) -> Option<bool> {
        self.get_mut(idx_bits).map(|bit| bit.replace(with))
    }

    /// Exchange the values of two bits.
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        let cells = self.cell_words();
        cells.bit_at(a).swap(cells.bit_at(b));
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, C::Word> {
        let len = self.len();
        let cells = self.cell_words();
        BitIter::new(BitCursor::new(cells, 0), BitCursor::new(cells, len))
    }

    /// Call `f(bit, index)` for every bit in ascending order, where `bit`
    /// can be written to.
    pub fn for_each_mut<F: FnMut(BitRef<'_, C::Word>, usize)>(&mut self, mut f: F) {
        let word_size = Self::WORD_SIZE;
        for (word_idx, slot) in self.cell_words().cells().iter().enumerate() {
            let base = word_idx * word_size;
            for offset in 0..word_size {
                f(BitRef::new(slot, offset), base + offset);
            }
        }
    }

    /// Set every bit to `value`.
    pub fn fill(&mut self, value: bool) {
        let pattern = <C::Word as Word>::fill_pattern(value);
        for word in self.container.words_mut().iter_mut() {
            *word = pattern;
        }
    }

    /// Copy the bits in `src` so they start at `dest`.
    ///
    /// The ranges may overlap. Panics if either range is out of bounds.
    pub fn copy_within(&mut self, src: Range<usize>, dest: usize) {
        let Range { start, end } = src;
        assert!(start <= end, "Source range starts after it ends");
        let count = end - start;
        let len = self.len();
        assert!(end <= len, "Source range is out of bounds");
        assert!(
            dest <= len && count <= len - dest,
            "Destination is out of bounds"
        );

        let cells = self.cell_words();
        let copy_one = |i: usize| cells.bit_at(dest + i).assign(cells.bit_at(start + i));
        if dest <= start {
            (0..count).for_each(copy_one)
        } else {
            (0..count).rev().for_each(copy_one)
        }
    }

    fn combine_words<D, F>(&mut self, other: &BitLens<D>, op: F)
    where
        D: WordContainer<Word = C::Word>,
        F: Fn(C::Word, C::Word) -> C::Word,
    {
        let other_words = other.container.len_words();
        trace_event!(
            words = self.container.len_words(),
            other_words,
            "combining words"
        );
        for (idx, word) in self.container.words_mut().iter_mut().enumerate() {
            let other_word = if idx < other_words {
                other.container.word(idx)
            } else {
                <C::Word as Word>::ZEROS
            };
            *word = op(*word, other_word);
        }
    }

    /// Bitwise AND with another sequence of bits, one word at a time.
    ///
    /// Bits past the end of `other` are treated as zero.
    pub fn and_with<D: WordContainer<Word = C::Word>>(&mut self, other: &BitLens<D>) {
        self.combine_words(other, |a, b| a & b)
    }

    /// Bitwise OR with another sequence of bits, one word at a time.
    pub fn or_with<D: WordContainer<Word = C::Word>>(&mut self, other: &BitLens<D>) {
        self.combine_words(other, |a, b| a | b)
    }

    /// Bitwise XOR with another sequence of bits, one word at a time.
    pub fn xor_with<D: WordContainer<Word = C::Word>>(&mut self, other: &BitLens<D>) {
        self.combine_words(other, |a, b| a ^ b)
    }

    /// Clear every bit which is set in `other` (`self AND NOT other`).
    pub fn difference_with<D: WordContainer<Word = C::Word>>(&mut self, other: &BitLens<D>) {
        self.combine_words(other, |a, b| a & !b)
    }

    /// Invert every bit.
    pub fn negate(&mut self) {
        for word in self.container.words_mut().iter_mut() {
            *word = !*word;
        }
    }
}

impl<C: ResizeWords> BitLens<C> {
    /// Resize the container to hold at least `len_bits` bits.
    ///
    /// The container is resized in whole words, so afterwards `len()` is
    /// `len_bits` rounded up to a multiple of `WORD_SIZE`. Words which are
    /// added have every bit set to `fill`; bits in words which were already
    /// there keep their values. When shrinking, whole words are dropped.
    pub fn resize(&mut self, len_bits: usize, fill: bool) {
        let words = ceil_div_usize(len_bits, Self::WORD_SIZE);
        trace_event!(len_bits, words, fill, "resizing bits");
        self.container
            .resize_words(words, <C::Word as Word>::fill_pattern(fill));
    }

    /// Resize like [`resize`](Self::resize), but report allocation failure
    /// instead of aborting.
    ///
    /// On failure the container is unchanged.
    pub fn try_resize(&mut self, len_bits: usize, fill: bool) -> Result<(), TryReserveError> {
        let words = ceil_div_usize(len_bits, Self::WORD_SIZE);
        let current_words = self.container.len_words();
        if words > current_words {
            self.container.try_reserve_words(words - current_words)?;
        }
        trace_event!(len_bits, words, fill, "resizing bits");
        self.container
            .resize_words(words, <C::Word as Word>::fill_pattern(fill));
        Ok(())
    }

    #[deprecated(note = "use `resize` instead")]
    pub fn resize_to_hold(&mut self, len_bits: usize, fill: bool) {
        self.resize(len_bits, fill)
    }
}

impl<'a, C: WordContainer> IntoIterator for &'a BitLens<C> {
    type Item = bool;
    type IntoIter = Iter<'a, C>;

    #[inline]
    fn into_iter(self) -> Iter<'a, C> {
        self.iter()
    }
}

impl<'a, C: WordContainerMut> IntoIterator for &'a mut BitLens<C> {
    type Item = BitRef<'a, C::Word>;
    type IntoIter = IterMut<'a, C::Word>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, C::Word> {
        self.iter_mut()
    }
}
