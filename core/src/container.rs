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
//! The capabilities a word container must offer to be viewed as bits.
//!
//! Any storage can be used which can report its length, give access to its
//! words by index and (for a resizable view) be resized with a fill word.
use crate::word::Word;
use alloc::boxed::Box;
use alloc::collections::{TryReserveError, VecDeque};
use alloc::vec::Vec;

/// Read access to a sequence of words.
pub trait WordContainer {
    type Word: Word;

    /// The number of words stored.
    fn len_words(&self) -> usize;

    /// Get a word by index.
    ///
    /// Panics if the index is out of bounds.
    fn word(&self, idx: usize) -> Self::Word;

    /// Address of the first word.
    ///
    /// Together with `len_words` this identifies the storage, so views of the
    /// same words made through different references can be recognised.
    fn storage_addr(&self) -> *const Self::Word;
}

/// Write access to a sequence of words.
pub trait WordContainerMut: WordContainer {
    /// Get a mutable reference to a word by index.
    ///
    /// Panics if the index is out of bounds.
    fn word_mut(&mut self, idx: usize) -> &mut Self::Word;

    /// All the words as one contiguous slice.
    ///
    /// Containers which are not always contiguous may need to move
    /// their contents to provide this.
    fn words_mut(&mut self) -> &mut [Self::Word];
}

/// A word container which can change its length.
pub trait ResizeWords: WordContainerMut {
    /// Change the number of words stored, new words are set to `fill`.
    fn resize_words(&mut self, new_len: usize, fill: Self::Word);

    /// Reserve space for at least `additional` more words.
    fn try_reserve_words(&mut self, additional: usize) -> Result<(), TryReserveError>;
}

impl<W: Word> WordContainer for [W] {
    type Word = W;

    #[inline]
    fn len_words(&self) -> usize {
        self.len()
    }

    #[inline]
    fn word(&self, idx: usize) -> W {
        self[idx]
    }

    #[inline]
    fn storage_addr(&self) -> *const W {
        self.as_ptr()
    }
}

impl<W: Word> WordContainerMut for [W] {
    #[inline]
    fn word_mut(&mut self, idx: usize) -> &mut W {
        &mut self[idx]
    }

    #[inline]
    fn words_mut(&mut self) -> &mut [W] {
        self
    }
}

impl<W: Word, const N: usize> WordContainer for [W; N] {
    type Word = W;

    #[inline]
    fn len_words(&self) -> usize {
        N
    }

    #[inline]
    fn word(&self, idx: usize) -> W {
        self[idx]
    }

    #[inline]
    fn storage_addr(&self) -> *const W {
        self.as_ptr()
    }
}

impl<W: Word, const N: usize> WordContainerMut for [W; N] {
    #[inline]
    fn word_mut(&mut self, idx: usize) -> &mut W {
        &mut self[idx]
    }

    #[inline]
    fn words_mut(&mut self) -> &mut [W] {
        &mut self[..]
    }
}

impl<W: Word> WordContainer for Box<[W]> {
    type Word = W;

    #[inline]
    fn len_words(&self) -> usize {
        self.len()
    }

    #[inline]
    fn word(&self, idx: usize) -> W {
        self[idx]
    }

    #[inline]
    fn storage_addr(&self) -> *const W {
        self.as_ptr()
    }
}

impl<W: Word> WordContainerMut for Box<[W]> {
    #[inline]
    fn word_mut(&mut self, idx: usize) -> &mut W {
        &mut self[idx]
    }

    #[inline]
    fn words_mut(&mut self) -> &mut [W] {
        &mut self[..]
    }
}

impl<W: Word> WordContainer for Vec<W> {
    type Word = W;

    #[inline]
    fn len_words(&self) -> usize {
        self.len()
    }

    #[inline]
    fn word(&self, idx: usize) -> W {
        self[idx]
    }

    #[inline]
    fn storage_addr(&self) -> *const W {
        self.as_ptr()
    }
}

impl<W: Word> WordContainerMut for Vec<W> {
    #[inline]
    fn word_mut(&mut self, idx: usize) -> &mut W {
        &mut self[idx]
    }

    #[inline]
    fn words_mut(&mut self) -> &mut [W] {
        self.as_mut_slice()
    }
}

impl<W: Word> ResizeWords for Vec<W> {
    #[inline]
    fn resize_words(&mut self, new_len: usize, fill: W) {
        self.resize(new_len, fill)
    }

    #[inline]
    fn try_reserve_words(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.try_reserve(additional)
    }
}

impl<W: Word> WordContainer for VecDeque<W> {
    type Word = W;

    #[inline]
    fn len_words(&self) -> usize {
        self.len()
    }

    #[inline]
    fn word(&self, idx: usize) -> W {
        self[idx]
    }

    #[inline]
    fn storage_addr(&self) -> *const W {
        self.as_slices().0.as_ptr()
    }
}

impl<W: Word> WordContainerMut for VecDeque<W> {
    #[inline]
    fn word_mut(&mut self, idx: usize) -> &mut W {
        &mut self[idx]
    }

    fn words_mut(&mut self) -> &mut [W] {
        self.make_contiguous()
    }
}

impl<W: Word> ResizeWords for VecDeque<W> {
    #[inline]
    fn resize_words(&mut self, new_len: usize, fill: W) {
        self.resize(new_len, fill)
    }

    #[inline]
    fn try_reserve_words(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.try_reserve(additional)
    }
}

impl<'a, C: WordContainer + ?Sized> WordContainer for &'a C {
    type Word = C::Word;

    #[inline]
    fn len_words(&self) -> usize {
        (**self).len_words()
    }

    #[inline]
    fn word(&self, idx: usize) -> C::Word {
        (**self).word(idx)
    }

    #[inline]
    fn storage_addr(&self) -> *const C::Word {
        (**self).storage_addr()
    }
}

impl<'a, C: WordContainer + ?Sized> WordContainer for &'a mut C {
    type Word = C::Word;

    #[inline]
    fn len_words(&self) -> usize {
        (**self).len_words()
    }

    #[inline]
    fn word(&self, idx: usize) -> C::Word {
        (**self).word(idx)
    }

    #[inline]
    fn storage_addr(&self) -> *const C::Word {
        (**self).storage_addr()
    }
}

impl<'a, C: WordContainerMut + ?Sized> WordContainerMut for &'a mut C {
    #[inline]
    fn word_mut(&mut self, idx: usize) -> &mut C::Word {
        (**self).word_mut(idx)
    }

    #[inline]
    fn words_mut(&mut self) -> &mut [C::Word] {
        (**self).words_mut()
    }
}

impl<'a, C: ResizeWords + ?Sized> ResizeWords for &'a mut C {
    #[inline]
    fn resize_words(&mut self, new_len: usize, fill: C::Word) {
        (**self).resize_words(new_len, fill)
    }

    #[inline]
    fn try_reserve_words(&mut self, additional: usize) -> Result<(), TryReserveError> {
        (**self).try_reserve_words(additional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len_and_words<C: WordContainer + ?Sized>(container: &C) -> (usize, Vec<C::Word>) {
        let words = (0..container.len_words()).map(|i| container.word(i)).collect();
        (container.len_words(), words)
    }

    #[test]
    fn test_read_access_is_uniform() {
        let words = [1u16, 2, 3];
        let expected = (3, vec![1u16, 2, 3]);
        assert_eq!(len_and_words(&words), expected);
        assert_eq!(len_and_words(&words[..]), expected);
        assert_eq!(len_and_words(&words.to_vec()), expected);
        assert_eq!(len_and_words(&words.to_vec().into_boxed_slice()), expected);
        assert_eq!(len_and_words(&words.iter().cloned().collect::<VecDeque<_>>()), expected);
        assert_eq!(len_and_words(&&words[..]), expected);
    }

    #[test]
    fn test_storage_addr_follows_the_words() {
        let words = vec![1u32, 2, 3];
        let by_ref = &words;
        assert_eq!(by_ref.storage_addr(), words.as_ptr());
        assert_eq!((&by_ref).storage_addr(), words.as_ptr());
        assert_eq!(words[..].storage_addr(), words.as_ptr());
        assert_ne!(words[1..].storage_addr(), words.as_ptr());

        let mut deque: VecDeque<u32> = VecDeque::new();
        deque.push_back(2);
        deque.push_front(1);
        assert_eq!(deque.storage_addr(), &deque[0] as *const u32);
    }

    #[test]
    fn test_word_mut() {
        let mut words = vec![0u8; 4];
        *words.word_mut(2) = 0xa5;
        assert_eq!(words, vec![0, 0, 0xa5, 0]);

        fn set_first<C: WordContainerMut<Word = u8>>(mut container: C) {
            *container.word_mut(0) = 1;
        }
        set_first(&mut words);
        assert_eq!(words.word(0), 1);
        set_first(&mut words[1..]);
        assert_eq!(words, vec![1, 1, 0xa5, 0]);
    }

    #[test]
    fn test_deque_words_mut_is_in_order() {
        let mut words = VecDeque::new();
        words.push_back(2u32);
        words.push_back(3);
        words.push_front(1);
        words.push_front(0);
        assert_eq!(words.words_mut(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_resize_words() {
        let mut words = vec![0x0fu8];
        words.resize_words(3, 0xff);
        assert_eq!(words, vec![0x0f, 0xff, 0xff]);
        words.resize_words(1, 0);
        assert_eq!(words, vec![0x0f]);

        let mut deque: VecDeque<u64> = VecDeque::new();
        deque.resize_words(2, u64::max_value());
        assert_eq!(deque.len_words(), 2);
        assert_eq!(deque.word(1), u64::max_value());
    }

    #[test]
    fn test_try_reserve_words() {
        let mut words: Vec<u32> = Vec::new();
        assert!(words.try_reserve_words(16).is_ok());
        assert!(words.capacity() >= 16);
        assert!(words.try_reserve_words(usize::max_value()).is_err());
    }
}
