//! Word width, alignment, and where a view's words sit inside its buffer.
//!
//! Right-aligned views lay a grid of `ceil(buffer_bits / width)` words over
//! the buffer so that the grid ends exactly on the buffer's last bit. When the
//! width does not divide the buffer, the first grid word starts before bit 0;
//! that overhang is the *slack* and always reads as zero.

use crate::UintNError;

type Result<T> = core::result::Result<T, UintNError>;

/// Packing discipline of an array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Words start at the buffer's first bit; trailing slack is padding.
    Left,
    /// The last word ends on the buffer's last bit; leading slack reads as zero.
    Right,
}

impl Alignment {
    /// Splits a signed bit width into its magnitude and alignment.
    ///
    /// A negative width selects right alignment.
    ///
    /// ```
    /// use uintn::Alignment;
    ///
    /// assert_eq!(Alignment::split(12).unwrap(), (12, Alignment::Left));
    /// assert_eq!(Alignment::split(-9).unwrap(), (9, Alignment::Right));
    /// assert!(Alignment::split(0).is_err());
    /// assert!(Alignment::split(33).is_err());
    /// ```
    pub fn split(bit_width: i8) -> Result<(u32, Alignment)> {
        let width = bit_width.unsigned_abs() as u32;
        if !(1..=32).contains(&width) {
            return Err(UintNError::InvalidBitWidth(bit_width));
        }
        let alignment = if bit_width < 0 {
            Alignment::Right
        } else {
            Alignment::Left
        };
        Ok((width, alignment))
    }

    /// Inverse of [`Alignment::split`].
    pub fn signed(self, width: u32) -> i8 {
        match self {
            Alignment::Left => width as i8,
            Alignment::Right => -(width as i8),
        }
    }

    /// Words that fit a buffer: whole words only on the left, every bit covered on the right.
    pub fn max_length(self, buffer_bits: usize, width: u32) -> usize {
        let width = width as usize;
        match self {
            Alignment::Left => buffer_bits / width,
            Alignment::Right => buffer_bits.div_ceil(width),
        }
    }

    /// How far the word grid overhangs the buffer start; zero or negative.
    pub fn slack(self, buffer_bits: usize, width: u32) -> isize {
        match self {
            Alignment::Left => 0,
            Alignment::Right => {
                let grid = self.max_length(buffer_bits, width) * width as usize;
                buffer_bits as isize - grid as isize
            }
        }
    }
}

/// Resolved first-word bit position and word count of a view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Placement {
    pub bit_offset: isize,
    pub len: usize,
}

/// Places a view over a buffer of `buffer_bits` bits.
///
/// `bit_offset` is measured from the buffer start for left-aligned views and
/// from the start of the word grid for right-aligned ones.
pub(crate) fn resolve(
    alignment: Alignment,
    buffer_bits: usize,
    width: u32,
    bit_offset: Option<usize>,
    len: Option<usize>,
) -> Result<Placement> {
    match alignment {
        Alignment::Left => resolve_left(buffer_bits, width, bit_offset, len),
        Alignment::Right => resolve_right(buffer_bits, width, bit_offset, len),
    }
}

fn resolve_left(
    buffer_bits: usize,
    width: u32,
    bit_offset: Option<usize>,
    len: Option<usize>,
) -> Result<Placement> {
    let offset = bit_offset.unwrap_or(0);
    let offset_bits = isize::try_from(offset)
        .ok()
        .filter(|_| offset <= buffer_bits)
        .ok_or(UintNError::BitOffsetOutOfBounds {
            bit_offset: offset,
            limit: buffer_bits,
        })?;

    let available = (buffer_bits - offset) / width as usize;
    let len = len.unwrap_or(available);
    if len > available {
        return Err(UintNError::LengthOutOfBounds {
            length: len,
            available,
        });
    }

    Ok(Placement {
        bit_offset: offset_bits,
        len,
    })
}

fn resolve_right(
    buffer_bits: usize,
    width: u32,
    bit_offset: Option<usize>,
    len: Option<usize>,
) -> Result<Placement> {
    let max_length = Alignment::Right.max_length(buffer_bits, width);
    let grid = max_length * width as usize;
    let slack = Alignment::Right.slack(buffer_bits, width);

    let len = match (bit_offset, len) {
        (_, Some(len)) => len,
        (Some(offset), None) => grid.saturating_sub(offset).div_ceil(width as usize),
        (None, None) => max_length,
    };
    let too_long = UintNError::LengthOutOfBounds {
        length: len,
        available: max_length,
    };
    let span = len
        .checked_mul(width as usize)
        .and_then(|bits| isize::try_from(bits).ok())
        .ok_or(too_long.clone())?;

    let grid_offset = match bit_offset {
        Some(offset) if offset >= grid => {
            return Err(UintNError::BitOffsetOutOfBounds {
                bit_offset: offset,
                limit: grid,
            });
        }
        Some(offset) => offset as isize,
        // last word ends on the last grid bit
        None => grid as isize - span,
    };

    let bit_offset = grid_offset + slack;
    bit_offset.checked_add(span).ok_or(too_long)?;

    Ok(Placement { bit_offset, len })
}
