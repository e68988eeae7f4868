//! Sequence algorithms written once against a minimal word-access capability.
//!
//! # Examples
//!
//! ```rust
//! use uintn::{UintNArray, WordSeq};
//!
//! let mut a = UintNArray::from_words(4, [1, 2, 3, 4, 5, 6]).unwrap();
//! a.copy_within(3, 4..6);
//! assert_eq!(a.to_vec(), vec![1, 2, 3, 5, 6, 6]);
//!
//! assert_eq!(a.index_of(6), Some(4));
//! assert_eq!(a.last_index_of(6), Some(5));
//! assert_eq!(a.words().rev().next(), Some(6));
//! ```

use crate::UintNArray;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::{Bound, RangeBounds};

/// Indexed access to a fixed number of unsigned words.
pub trait WordSeq {
    fn len(&self) -> usize;

    /// The word at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<u32>;

    /// Stores `value` at `index`; out-of-range indices are ignored.
    fn set(&mut self, index: usize, value: u32);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn words(&self) -> WordIter<'_, Self> {
        WordIter {
            seq: self,
            front: 0,
            back: self.len(),
        }
    }

    fn to_vec(&self) -> Vec<u32> {
        self.words().collect()
    }

    fn fill(&mut self, value: u32) {
        for i in 0..self.len() {
            self.set(i, value);
        }
    }

    /// Copies the words in `range` to `target`, like `slice::copy_within`.
    ///
    /// Negative bounds count back from the end and bounds are clamped to the
    /// sequence. The copy is shortened to the words available after `target`;
    /// an empty range or a `target` past the end copies nothing.
    fn copy_within<R: RangeBounds<isize>>(&mut self, target: usize, range: R) {
        let len = self.len();
        let (start, end) = clamp_range(&range, len);
        if target >= len || end <= start {
            return;
        }
        let count = (end - start).min(len - target);
        let tmp: Vec<u32> = (start..start + count).filter_map(|i| self.get(i)).collect();
        for (i, word) in tmp.into_iter().enumerate() {
            self.set(target + i, word);
        }
    }

    fn index_of(&self, value: u32) -> Option<usize> {
        self.words().position(|w| w == value)
    }

    fn last_index_of(&self, value: u32) -> Option<usize> {
        self.words().rposition(|w| w == value)
    }

    fn contains(&self, value: u32) -> bool {
        self.index_of(value).is_some()
    }
}

/// Resolves a signed range against `len`: negative bounds count from the end,
/// everything is clamped to `0..=len`, and `end` never precedes `start`.
pub(crate) fn clamp_range<R: RangeBounds<isize>>(range: &R, len: usize) -> (usize, usize) {
    let len = len as isize;
    let resolve = |i: isize| {
        if i < 0 {
            (i + len).max(0)
        } else {
            i.min(len)
        }
    };

    let start = match range.start_bound() {
        Bound::Included(&b) => resolve(b),
        Bound::Excluded(&b) => (resolve(b) + 1).min(len),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => (resolve(e) + 1).min(len),
        Bound::Excluded(&e) => resolve(e),
        Bound::Unbounded => len,
    };

    (start as usize, end.max(start) as usize)
}

pub struct WordIter<'a, S: WordSeq + ?Sized> {
    seq: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: WordSeq + ?Sized> Iterator for WordIter<'a, S> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let word = self.seq.get(self.front);
        self.front += 1;
        word
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, S: WordSeq + ?Sized> DoubleEndedIterator for WordIter<'a, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.seq.get(self.back)
    }
}

impl<'a, S: WordSeq + ?Sized> ExactSizeIterator for WordIter<'a, S> {}

impl<'a, S: WordSeq + ?Sized> FusedIterator for WordIter<'a, S> {}

impl<'a> IntoIterator for &'a UintNArray {
    type Item = u32;
    type IntoIter = WordIter<'a, UintNArray>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}

/// Copying algorithms: each result lives in a new buffer with the same signed width.
impl UintNArray {
    pub fn filter<F>(&self, mut keep: F) -> UintNArray
    where
        F: FnMut(u32) -> bool,
    {
        self.collect_words(self.words().filter(|&w| keep(w)))
    }

    /// Applies `f` to every word; results are truncated to the width.
    pub fn map<F>(&self, f: F) -> UintNArray
    where
        F: FnMut(u32) -> u32,
    {
        self.collect_words(self.words().map(f))
    }

    pub fn reversed(&self) -> UintNArray {
        self.collect_words(self.words().rev())
    }

    pub fn sorted(&self) -> UintNArray {
        let mut words = self.to_vec();
        words.sort_unstable();
        self.collect_words(words)
    }

    /// Copy of the words in `range`, resolved like [`UintNArray::subarray`].
    pub fn slice<R: RangeBounds<isize>>(&self, range: R) -> UintNArray {
        let (start, end) = clamp_range(&range, self.len);
        self.collect_words((start..end).filter_map(|i| self.get(i)))
    }

    fn collect_words<I>(&self, words: I) -> UintNArray
    where
        I: IntoIterator<Item = u32>,
    {
        let words: Vec<u32> = words.into_iter().collect();
        let bits = words.len() * self.width as usize;
        let mut out = UintNArray::allocate(self.width, self.alignment, words.len(), bits);
        out.write_all(&words);
        out
    }
}
