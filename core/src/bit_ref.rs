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
//! A reference to a single bit inside a word.
use crate::word::Word;
use core::cell::Cell;
use core::fmt;

/// A mutable reference to one bit of a word.
///
/// The word is held through a `Cell`, so any number of references
/// (including several into the same word) can be alive at once.
/// Writing through a reference only ever changes the referenced bit.
#[derive(Copy, Clone)]
pub struct BitRef<'a, W> {
    slot: &'a Cell<W>,
    offset: usize,
}

impl<'a, W: Word> BitRef<'a, W> {
    /// Reference the bit at `offset` in the word held by `slot`.
    ///
    /// The offset must be less than `W::BITS`.
    #[inline]
    pub fn new(slot: &'a Cell<W>, offset: usize) -> Self {
        debug_assert!(offset < W::BITS, "Bit offset out of range");
        BitRef { slot, offset }
    }

    #[inline]
    pub fn from_mut(word: &'a mut W, offset: usize) -> Self {
        Self::new(Cell::from_mut(word), offset)
    }

    /// The offset of the bit in its word.
    #[inline]
    pub fn offset(self) -> usize {
        self.offset
    }

    #[inline]
    pub fn read(self) -> bool {
        self.slot.get().bit(self.offset)
    }

    #[inline]
    pub fn write(self, value: bool) {
        self.slot.set(self.slot.get().with_bit(self.offset, value))
    }

    /// Write a new value and return the previous one.
    #[inline]
    pub fn replace(self, value: bool) -> bool {
        let previous = self.read();
        self.write(value);
        previous
    }

    /// Copy the value of another bit into this one.
    #[inline]
    pub fn assign(self, from: BitRef<'_, W>) {
        self.write(from.read())
    }

    /// Exchange the values of two bits.
    ///
    /// The references keep pointing where they did, only the bits move.
    #[inline]
    pub fn swap(self, other: BitRef<'_, W>) {
        let tmp = self.read();
        self.write(other.read());
        other.write(tmp);
    }
}

impl<'a, W: Word> From<BitRef<'a, W>> for bool {
    #[inline]
    fn from(bit: BitRef<'a, W>) -> Self {
        bit.read()
    }
}

impl<'a, W: Word> PartialEq<bool> for BitRef<'a, W> {
    #[inline]
    fn eq(&self, other: &bool) -> bool {
        self.read() == *other
    }
}

impl<'a, 'b, W: Word> PartialEq<BitRef<'b, W>> for BitRef<'a, W> {
    #[inline]
    fn eq(&self, other: &BitRef<'b, W>) -> bool {
        self.read() == other.read()
    }
}

impl<'a, W: Word> fmt::Debug for BitRef<'a, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BitRef")
            .field("offset", &self.offset)
            .field("value", &self.read())
            .finish()
    }
}
