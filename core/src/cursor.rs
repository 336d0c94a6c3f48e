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
//! Random-access positions in a sequence of bits, and iterators over them.
//!
//! A [`BitCursor`] is a base (something which can produce the bits, usually a
//! reference to a word container) plus an absolute bit index. Moving the cursor
//! only changes the index; the word holding the bit is found again from the base
//! each time the cursor is read, so crossing a word boundary needs no special case.
use crate::bit_ref::BitRef;
use crate::container::WordContainer;
use crate::word::{split_index, Word};
use core::cell::Cell;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// Something a cursor can read bits from.
///
/// A shared reference to a word container gives the bits as `bool` values,
/// [`CellWords`] gives them as mutable [`BitRef`]s.
pub trait BitSource: Copy {
    type Word: Word;
    type Bit;

    /// Get the bit at an absolute index.
    ///
    /// Panics if the index is past the last word.
    fn bit_at(self, idx_bits: usize) -> Self::Bit;

    /// Whether two sources are the same storage.
    fn same_base(self, other: Self) -> bool;
}

impl<'a, C: WordContainer + ?Sized> BitSource for &'a C {
    type Word = C::Word;
    type Bit = bool;

    #[inline]
    fn bit_at(self, idx_bits: usize) -> bool {
        let (word_idx, offset) = split_index::<C::Word>(idx_bits);
        <C as WordContainer>::word(self, word_idx).bit(offset)
    }

    #[inline]
    fn same_base(self, other: Self) -> bool {
        core::ptr::eq(self.storage_addr(), other.storage_addr())
            && self.len_words() == other.len_words()
    }
}

/// Words viewed through cells, so that references to many bits can be alive together.
#[derive(Copy, Clone)]
pub struct CellWords<'a, W>(&'a [Cell<W>]);

impl<'a, W: Word> fmt::Debug for CellWords<'a, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(Cell::get)).finish()
    }
}

impl<'a, W: Word> CellWords<'a, W> {
    #[inline]
    pub fn new(words: &'a mut [W]) -> Self {
        CellWords(Cell::from_mut(words).as_slice_of_cells())
    }

    #[inline]
    pub fn from_cells(cells: &'a [Cell<W>]) -> Self {
        CellWords(cells)
    }

    #[inline]
    pub fn len_words(self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn cells(self) -> &'a [Cell<W>] {
        self.0
    }
}

impl<'a, W: Word> BitSource for CellWords<'a, W> {
    type Word = W;
    type Bit = BitRef<'a, W>;

    #[inline]
    fn bit_at(self, idx_bits: usize) -> BitRef<'a, W> {
        let (word_idx, offset) = split_index::<W>(idx_bits);
        BitRef::new(&self.0[word_idx], offset)
    }

    #[inline]
    fn same_base(self, other: Self) -> bool {
        core::ptr::eq(self.0.as_ptr(), other.0.as_ptr()) && self.0.len() == other.0.len()
    }
}

/// A position in a sequence of bits.
///
/// Cursors over the same base can be compared and subtracted to get the
/// distance in bits between them.
#[derive(Copy, Clone, Debug)]
pub struct BitCursor<S> {
    base: S,
    index: usize,
}

impl<S: BitSource> BitCursor<S> {
    #[inline]
    pub fn new(base: S, index: usize) -> Self {
        BitCursor { base, index }
    }

    #[inline]
    pub fn base(&self) -> S {
        self.base
    }

    /// The absolute bit index of the cursor.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Read the bit under the cursor.
    ///
    /// Panics if the cursor is past the last word of its base.
    #[inline]
    pub fn get(&self) -> S::Bit {
        self.base.bit_at(self.index)
    }

    /// Signed distance in bits from `origin` to this cursor.
    ///
    /// Only the bit indexes are compared.
    #[inline]
    pub fn distance_from(&self, origin: &Self) -> isize {
        (self.index as isize).wrapping_sub(origin.index as isize)
    }
}

impl<S: BitSource> Add<usize> for BitCursor<S> {
    type Output = Self;

    #[inline]
    fn add(self, n: usize) -> Self {
        BitCursor::new(self.base, self.index + n)
    }
}

impl<S: BitSource> Sub<usize> for BitCursor<S> {
    type Output = Self;

    #[inline]
    fn sub(self, n: usize) -> Self {
        BitCursor::new(self.base, self.index - n)
    }
}

impl<S: BitSource> AddAssign<usize> for BitCursor<S> {
    #[inline]
    fn add_assign(&mut self, n: usize) {
        self.index += n;
    }
}

impl<S: BitSource> SubAssign<usize> for BitCursor<S> {
    #[inline]
    fn sub_assign(&mut self, n: usize) {
        self.index -= n;
    }
}

impl<S: BitSource> Sub for BitCursor<S> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.distance_from(&origin)
    }
}

impl<S: BitSource> PartialEq for BitCursor<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.base.same_base(other.base) && self.index == other.index
    }
}

impl<S: BitSource> Eq for BitCursor<S> {}

impl<S: BitSource> PartialOrd for BitCursor<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.base.same_base(other.base) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

/// Iterator over the bits between two cursors.
///
/// Indexing into the iterator with `nth` is constant time.
#[derive(Clone, Debug)]
pub struct BitIter<S> {
    start: BitCursor<S>,
    end: BitCursor<S>,
}

/// Iterator over the bits of a container as `bool`s.
pub type Iter<'a, C> = BitIter<&'a C>;

/// Iterator over the bits of a container as [`BitRef`]s.
pub type IterMut<'a, W> = BitIter<CellWords<'a, W>>;

impl<S: BitSource> BitIter<S> {
    /// Iterate from `start` (inclusive) to `end` (exclusive).
    #[inline]
    pub fn new(start: BitCursor<S>, end: BitCursor<S>) -> Self {
        debug_assert!(start.base.same_base(end.base));
        assert!(start.index <= end.index, "Iterator range starts after it ends");
        BitIter { start, end }
    }

    /// Cursor at the next bit to come from the front.
    #[inline]
    pub fn start(&self) -> BitCursor<S> {
        self.start
    }

    /// Cursor one past the next bit to come from the back.
    #[inline]
    pub fn end(&self) -> BitCursor<S> {
        self.end
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.end.index - self.start.index
    }
}

impl<S: BitSource> Iterator for BitIter<S> {
    type Item = S::Bit;

    #[inline]
    fn next(&mut self) -> Option<S::Bit> {
        if self.start.index < self.end.index {
            let bit = self.start.get();
            self.start.index += 1;
            Some(bit)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining()
    }

    fn nth(&mut self, n: usize) -> Option<S::Bit> {
        if n < self.remaining() {
            self.start.index += n;
            self.next()
        } else {
            self.start.index = self.end.index;
            None
        }
    }

    #[inline]
    fn last(mut self) -> Option<S::Bit> {
        self.next_back()
    }
}

impl<S: BitSource> DoubleEndedIterator for BitIter<S> {
    #[inline]
    fn next_back(&mut self) -> Option<S::Bit> {
        if self.start.index < self.end.index {
            self.end.index -= 1;
            Some(self.end.get())
        } else {
            None
        }
    }

    fn nth_back(&mut self, n: usize) -> Option<S::Bit> {
        if n < self.remaining() {
            self.end.index -= n;
            self.next_back()
        } else {
            self.end.index = self.start.index;
            None
        }
    }
}

impl<S: BitSource> ExactSizeIterator for BitIter<S> {}

impl<S: BitSource> FusedIterator for BitIter<S> {}
