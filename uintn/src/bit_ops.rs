//! MSB-first bit addressing over a byte slice.
//!
//! Bit 0 is the most significant bit of byte 0, and a word occupying
//! `[pos, pos + width)` keeps its most significant bit at `pos`. Positions
//! may be negative or run past the end of the slice: those bits read as zero
//! and are never written.

/// Mask of the low `width` bits of a word.
#[inline(always)]
pub fn word_mask(width: u32) -> u32 {
    if width >= 32 { u32::MAX } else { (1u32 << width) - 1 }
}

#[inline(always)]
fn low_mask(n: usize) -> u8 {
    ((1u16 << n) - 1) as u8
}

#[inline(always)]
fn bit_len(slice: &[u8]) -> isize {
    isize::try_from(slice.len().saturating_mul(8)).unwrap_or(isize::MAX)
}

/// The part of `[pos, pos + width)` inside the slice, or `None` if they don't overlap.
#[inline]
fn clip(pos: isize, width: u32, total: isize) -> Option<(usize, usize)> {
    let end = pos.checked_add(width as isize)?;
    if end <= 0 || pos >= total {
        return None;
    }
    Some((pos.max(0) as usize, end.min(total) as usize))
}

/// Reads the `width`-bit word starting at bit `pos`.
///
/// Returns `None` when no bit of the word lies inside the slice.
pub fn get_bits(slice: &[u8], pos: isize, width: u32) -> Option<u32> {
    debug_assert!((1..=32).contains(&width));
    let (start, end) = clip(pos, width, bit_len(slice))?;

    let mut value = 0u64;
    let mut at = start;
    while at < end {
        let bit_in_byte = at & 7;
        let read = (8 - bit_in_byte).min(end - at);
        let bits = (slice[at >> 3] >> (8 - read - bit_in_byte)) & low_mask(read);

        value = (value << read) | bits as u64;
        at += read;
    }

    // bits past the end of the slice
    let word_end = (pos + width as isize) as usize;
    Some((value << (word_end - end)) as u32)
}

/// Writes the low `width` bits of `value` to the word starting at bit `pos`.
///
/// Higher bits of `value` are dropped. Bits of the word outside the slice are
/// skipped, and no bit outside the word is modified.
pub fn set_bits(slice: &mut [u8], pos: isize, width: u32, value: u32) {
    debug_assert!((1..=32).contains(&width));
    let Some((start, end)) = clip(pos, width, bit_len(slice)) else {
        return;
    };

    let value = (value & word_mask(width)) as u64;
    let word_end = (pos + width as isize) as usize;

    let mut at = start;
    while at < end {
        let bit_in_byte = at & 7;
        let wrote = (8 - bit_in_byte).min(end - at);
        let mask = low_mask(wrote);
        let bits = (value >> (word_end - at - wrote)) as u8 & mask;
        let dest_shift = 8 - bit_in_byte - wrote;

        let byte = &mut slice[at >> 3];
        *byte = (*byte & !(mask << dest_shift)) | (bits << dest_shift);

        at += wrote;
    }
}
