//! Deriving new views over an array's buffer.

use crate::seq::clamp_range;
use crate::{Alignment, UintNArray, UintNError};
use core::ops::RangeBounds;

impl UintNArray {
    /// Views the whole buffer again at another width and alignment.
    ///
    /// The current offset and length are dropped. With `bit_length`, the
    /// number of meaningful bits known to be at the end (right) or start
    /// (left) of the buffer, the new view holds `ceil(bit_length / width)`
    /// words; without it the view covers the whole buffer, which for
    /// right-aligned views can add leading zero words.
    ///
    /// # Errors
    ///
    /// `InvalidBitWidth`, or a bounds error if a left-aligned `bit_length`
    /// exceeds the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::UintNArray;
    ///
    /// let nines = UintNArray::from_words(-9, [1, 1]).unwrap();
    /// assert_eq!(nines.reinterpret(-9, None).unwrap().to_string(), "0,1,1");
    /// assert_eq!(nines.reinterpret(-7, Some(18)).unwrap().to_string(), "0,4,1");
    /// ```
    pub fn reinterpret(
        &self,
        bit_width: i8,
        bit_length: Option<usize>,
    ) -> Result<UintNArray, UintNError> {
        let len = match bit_length {
            Some(bits) => {
                let (width, _) = Alignment::split(bit_width)?;
                Some(bits.div_ceil(width as usize))
            }
            None => None,
        };
        UintNArray::from_buffer(bit_width, self.buffer.clone(), None, len)
    }

    /// A view of the words in `range`, sharing this array's buffer.
    ///
    /// Negative bounds count back from the end, bounds are clamped to
    /// `0..=len()`, and an end before the start gives an empty view.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::UintNArray;
    ///
    /// let a = UintNArray::from_words(4, [1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.subarray(2..).to_string(), "3,4");
    /// assert_eq!(a.subarray(1..-1).to_string(), "2,3");
    /// assert_eq!(a.subarray(-99..99).to_string(), "1,2,3,4");
    /// assert_eq!(a.subarray(1..3).subarray(1..), a.subarray(2..3));
    /// ```
    pub fn subarray<R: RangeBounds<isize>>(&self, range: R) -> UintNArray {
        let (begin, end) = clamp_range(&range, self.len);
        self.view(begin, end)
    }

    /// Drops zero words from the padded end: leading words when right
    /// aligned, trailing words when left aligned. At least one word is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::UintNArray;
    ///
    /// let r = UintNArray::from_words(-7, [0, 0, 4, 1]).unwrap();
    /// assert_eq!(r.trim_zeros().to_string(), "4,1");
    ///
    /// let l = UintNArray::from_words(7, [4, 1, 0, 0]).unwrap();
    /// assert_eq!(l.trim_zeros().to_string(), "4,1");
    ///
    /// let zeros = UintNArray::from_words(-7, [0, 0]).unwrap();
    /// assert_eq!(zeros.trim_zeros().to_string(), "0");
    /// ```
    pub fn trim_zeros(&self) -> UintNArray {
        if self.len == 0 {
            return self.clone();
        }
        let last = self.len - 1;
        match self.alignment {
            Alignment::Right => {
                let first = (0..last)
                    .find(|&i| self.get(i) != Some(0))
                    .unwrap_or(last);
                self.view(first, self.len)
            }
            Alignment::Left => {
                let end = (1..=last)
                    .rev()
                    .find(|&i| self.get(i) != Some(0))
                    .unwrap_or(0);
                self.view(0, end + 1)
            }
        }
    }

    fn view(&self, begin: usize, end: usize) -> UintNArray {
        UintNArray {
            buffer: self.buffer.clone(),
            width: self.width,
            alignment: self.alignment,
            bit_offset: self.word_bit_pos(begin),
            len: end - begin,
        }
    }
}
