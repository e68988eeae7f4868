//! Arrays of `N`-bit unsigned words over a shared byte buffer.
//!
//! # Examples
//!
//! ## Left alignment
//!
//! ```rust
//! use uintn::UintNArray;
//!
//! let words = UintNArray::from_words(4, [1, 2, 3, 4]).unwrap();
//! assert_eq!(words.buffer().to_vec(), vec![0x12, 0x34]);
//! assert_eq!(words.byte_length(), 2.0);
//! ```
//!
//! ## Right alignment
//!
//! ```rust
//! use uintn::UintNArray;
//!
//! // 2 x 9 bits in 3 bytes: the words end on the last bit of the buffer
//! let nines = UintNArray::from_words(-9, [1, 1]).unwrap();
//! assert_eq!(nines.buffer().to_vec(), vec![0x00, 0x02, 0x01]);
//!
//! // the same bytes seen as 7-bit words pick up leading zeros
//! let sevens = nines.reinterpret(-7, None).unwrap();
//! assert_eq!(sevens.to_string(), "0,0,4,1");
//! ```
//!
//! ## Views over an existing buffer
//!
//! ```rust
//! use raw_bytes::ByteBuffer;
//! use uintn::UintNArray;
//!
//! let buffer = ByteBuffer::wrap(vec![1, 2, 3, 4, 255, 254, 253, 252]);
//! let view = UintNArray::from_buffer(4, buffer, Some(4), Some(5)).unwrap();
//! assert_eq!(view.to_string(), "1,0,2,0,3");
//! assert_eq!(view.byte_offset(), 0.5);
//! ```
use crate::UintNError;
use crate::alignment::{self, Alignment};
use crate::bit_ops;
use crate::seq::WordSeq;
use alloc::vec::Vec;
use core::fmt;
use raw_bytes::ByteBuffer;

type Result<T> = core::result::Result<T, UintNError>;

/// What an array is built from; see [`UintNArray::construct`].
#[derive(Debug, Clone)]
pub enum Source {
    /// A fresh zero-filled array of this many words
    Length(usize),
    /// A fresh array holding these words, each truncated to the width
    Words(Vec<u32>),
    /// A view into an existing buffer
    Buffer {
        buffer: ByteBuffer,
        bit_offset: Option<usize>,
        len: Option<usize>,
    },
    /// Anything else: yields an empty array
    Other,
}

/// Fixed-length array of unsigned words between 1 and 32 bits wide.
///
/// Words are stored most-significant-bit first. Cloning, [`UintNArray::subarray`],
/// [`UintNArray::reinterpret`] and [`UintNArray::trim_zeros`] all produce views
/// that share the same [`ByteBuffer`]; a write through one of them is seen by
/// all of them.
#[derive(Debug, Clone)]
pub struct UintNArray {
    pub(crate) buffer: ByteBuffer,
    pub(crate) width: u32,
    pub(crate) alignment: Alignment,
    pub(crate) bit_offset: isize,
    pub(crate) len: usize,
}

impl UintNArray {
    /// Builds an array from any [`Source`].
    ///
    /// # Errors
    ///
    /// `InvalidBitWidth` for a width outside ±1..=32, plus the errors of the
    /// selected constructor.
    pub fn construct(bit_width: i8, source: Source) -> Result<Self> {
        match source {
            Source::Length(len) => Self::new(bit_width, len),
            Source::Words(words) => Self::from_words(bit_width, words),
            Source::Buffer {
                buffer,
                bit_offset,
                len,
            } => Self::from_buffer(bit_width, buffer, bit_offset, len),
            Source::Other => Self::empty(bit_width),
        }
    }

    /// Creates `len` zero words in a new buffer of `ceil(width * len / 8)` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::UintNArray;
    ///
    /// let a = UintNArray::new(4, 5).unwrap();
    /// assert_eq!(a.to_string(), "0,0,0,0,0");
    /// assert_eq!(a.buffer().byte_length(), 3);
    /// ```
    pub fn new(bit_width: i8, len: usize) -> Result<Self> {
        let (width, alignment) = Alignment::split(bit_width)?;
        let bits = len
            .checked_mul(width as usize)
            .filter(|&bits| isize::try_from(bits).is_ok())
            .ok_or(UintNError::InvalidLength(len))?;
        Ok(Self::allocate(width, alignment, len, bits))
    }

    /// Creates an array holding `words`; each is truncated to its low bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::UintNArray;
    ///
    /// let a = UintNArray::from_words(4, [15, 16, 17]).unwrap();
    /// assert_eq!(a.to_string(), "15,0,1");
    /// ```
    pub fn from_words<I>(bit_width: i8, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        let words: Vec<u32> = words.into_iter().collect();
        let mut array = Self::new(bit_width, words.len())?;
        array.write_all(&words);
        Ok(array)
    }

    /// Views `buffer` without copying it.
    ///
    /// Left-aligned views start `bit_offset` bits into the buffer (default 0)
    /// and by default take every whole word up to the end of the buffer.
    ///
    /// Right-aligned views measure `bit_offset` from the start of a grid of
    /// `ceil(buffer_bits / width)` words whose last word ends on the last bit
    /// of the buffer. Without an offset the view is placed so its last word is
    /// the last grid word, and without a length it runs to the end of the grid.
    /// A length longer than the grid is allowed: the extra leading words lie
    /// before the buffer, read as zero, and ignore writes.
    ///
    /// # Errors
    ///
    /// - `BitOffsetOutOfBounds` if a left offset exceeds the buffer, or a right
    ///   offset is not inside the grid
    /// - `LengthOutOfBounds` if left-aligned words would run past the buffer
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::ByteBuffer;
    /// use uintn::UintNArray;
    ///
    /// let buffer = ByteBuffer::wrap(vec![0x10, 0x01]);
    /// let nines = UintNArray::from_buffer(-9, buffer.clone(), None, None).unwrap();
    /// assert_eq!(nines.to_string(), "8,1");
    ///
    /// assert!(UintNArray::from_buffer(4, buffer, Some(0), Some(5)).is_err());
    /// ```
    pub fn from_buffer(
        bit_width: i8,
        buffer: ByteBuffer,
        bit_offset: Option<usize>,
        len: Option<usize>,
    ) -> Result<Self> {
        let (width, alignment) = Alignment::split(bit_width)?;
        let placement =
            alignment::resolve(alignment, buffer.bit_length(), width, bit_offset, len)?;
        Ok(Self {
            buffer,
            width,
            alignment,
            bit_offset: placement.bit_offset,
            len: placement.len,
        })
    }

    /// An array of no words over an empty buffer.
    pub fn empty(bit_width: i8) -> Result<Self> {
        let (width, alignment) = Alignment::split(bit_width)?;
        Ok(Self::allocate(width, alignment, 0, 0))
    }

    /// Fresh buffer holding `len` words in exactly `bits` bits; right-aligned
    /// words end on the last bit of the last byte.
    pub(crate) fn allocate(width: u32, alignment: Alignment, len: usize, bits: usize) -> Self {
        let buffer = ByteBuffer::allocate(bits.div_ceil(8));
        let bit_offset = match alignment {
            Alignment::Left => 0,
            Alignment::Right => (buffer.bit_length() - bits) as isize,
        };
        Self {
            buffer,
            width,
            alignment,
            bit_offset,
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Width of each word in bits (1..=32).
    #[inline]
    pub fn bit_width(&self) -> u32 {
        self.width
    }

    /// Width with the alignment folded into the sign, as accepted by the constructors.
    #[inline]
    pub fn signed_bit_width(&self) -> i8 {
        self.alignment.signed(self.width)
    }

    #[inline]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Bit position of the first word; negative when leading words are virtual.
    #[inline]
    pub fn bit_offset(&self) -> isize {
        self.bit_offset
    }

    pub fn max_length(&self) -> usize {
        self.alignment
            .max_length(self.buffer.bit_length(), self.width)
    }

    pub fn buffer(&self) -> &ByteBuffer {
        &self.buffer
    }

    /// Bytes spanned by the words; fractional when they don't fill whole bytes.
    pub fn byte_length(&self) -> f64 {
        self.len as f64 * self.width as f64 / 8.0
    }

    /// Byte position of the first word; may be fractional or negative.
    pub fn byte_offset(&self) -> f64 {
        self.bit_offset as f64 / 8.0
    }

    #[inline]
    pub(crate) fn word_bit_pos(&self, index: usize) -> isize {
        self.bit_offset + (index * self.width as usize) as isize
    }

    /// Returns the word at `index`, or `None` past the end.
    ///
    /// Words of a right-aligned view that lie before the buffer read as `0`.
    pub fn get(&self, index: usize) -> Option<u32> {
        if index >= self.len {
            return None;
        }
        let bytes = self.buffer.bytes();
        Some(bit_ops::get_bits(&bytes, self.word_bit_pos(index), self.width).unwrap_or(0))
    }

    /// Stores the low `bit_width` bits of `value` at `index`.
    ///
    /// Does nothing past the end, and only the in-buffer bits of a virtual
    /// leading word are written.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::UintNArray;
    ///
    /// let mut a = UintNArray::from_words(4, [1, 2, 3, 4]).unwrap();
    /// a.set(1, 0x1F);
    /// a.set(99, 9);
    /// assert_eq!(a.to_string(), "1,15,3,4");
    /// ```
    pub fn set(&mut self, index: usize, value: u32) {
        if index >= self.len {
            return;
        }
        let pos = self.word_bit_pos(index);
        let mut bytes = self.buffer.bytes_mut();
        bit_ops::set_bits(&mut bytes, pos, self.width, value);
    }

    /// Writes `words` starting at word `offset`.
    ///
    /// # Errors
    ///
    /// `OffsetOutOfBounds` if the words don't fit before the end of the
    /// array; nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::UintNArray;
    ///
    /// let mut a = UintNArray::new(4, 6).unwrap();
    /// a.set_from([1, 2, 3], 2).unwrap();
    /// assert_eq!(a.to_string(), "0,0,1,2,3,0");
    /// assert!(a.set_from([1, 2, 3], 4).is_err());
    /// ```
    pub fn set_from<I>(&mut self, words: I, offset: usize) -> Result<()>
    where
        I: IntoIterator<Item = u32>,
    {
        let words: Vec<u32> = words.into_iter().collect();
        let count = words.len();
        if offset.checked_add(count).is_none_or(|end| end > self.len) {
            return Err(UintNError::OffsetOutOfBounds {
                offset,
                count,
                length: self.len,
            });
        }

        let start = self.word_bit_pos(offset);
        let mut bytes = self.buffer.bytes_mut();
        for (i, &word) in words.iter().enumerate() {
            let pos = start + (i * self.width as usize) as isize;
            bit_ops::set_bits(&mut bytes, pos, self.width, word);
        }
        Ok(())
    }

    pub(crate) fn write_all(&mut self, words: &[u32]) {
        for (i, &word) in words.iter().enumerate() {
            self.set(i, word);
        }
    }
}

impl WordSeq for UintNArray {
    fn len(&self) -> usize {
        UintNArray::len(self)
    }

    fn get(&self, index: usize) -> Option<u32> {
        UintNArray::get(self, index)
    }

    fn set(&mut self, index: usize, value: u32) {
        UintNArray::set(self, index, value)
    }
}

/// Word-wise equality: same width, alignment and values, wherever the bytes live.
impl PartialEq for UintNArray {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.alignment == other.alignment
            && self.len == other.len
            && self.words().eq(other.words())
    }
}

impl Eq for UintNArray {}

/// Comma-separated words, e.g. `1,2,3`.
impl fmt::Display for UintNArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}
