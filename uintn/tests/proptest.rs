//! Property-based tests for packed word arrays.

use proptest::prelude::*;
use uintn::{Alignment, ByteBuffer, UintNArray, WordSeq};

#[cfg(feature = "mmap")]
use tempfile::NamedTempFile;

//
// -----------------------------------------------------------------------------
// Helper Functions
// -----------------------------------------------------------------------------

fn mask(width: i8) -> u32 {
    let w = width.unsigned_abs() as u32;
    if w == 32 { u32::MAX } else { (1u32 << w) - 1 }
}

/// Any valid signed width: 1..=32 left aligned, -32..=-1 right aligned
fn signed_width() -> impl Strategy<Value = i8> {
    prop_oneof![1i8..=32, -32i8..=-1]
}

//
// -----------------------------------------------------------------------------
// Word Storage
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_words_roundtrip_truncated(
        width in signed_width(),
        values in prop::collection::vec(any::<u32>(), 0..200)
    ) {
        let a = UintNArray::from_words(width, values.iter().copied()).unwrap();
        let m = mask(width);

        prop_assert_eq!(a.len(), values.len());
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(a.get(i), Some(v & m));
        }
        prop_assert_eq!(a.get(values.len()), None);

        let bits = values.len() * width.unsigned_abs() as usize;
        prop_assert_eq!(a.buffer().byte_length(), bits.div_ceil(8));
    }
}

proptest! {
    #[test]
    fn prop_set_leaves_neighbours(
        width in signed_width(),
        values in prop::collection::vec(any::<u32>(), 1..100),
        index in 0usize..100,
        new_val: u32
    ) {
        let mut a = UintNArray::from_words(width, values.iter().copied()).unwrap();
        let m = mask(width);
        let idx = index % values.len();

        a.set(idx, new_val);
        prop_assert_eq!(a.get(idx), Some(new_val & m));

        // Other values unchanged
        for (i, &expected) in values.iter().enumerate() {
            if i != idx {
                prop_assert_eq!(a.get(i), Some(expected & m));
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_out_of_range_set_is_ignored(
        width in signed_width(),
        values in prop::collection::vec(any::<u32>(), 0..50),
        extra in 0usize..1000
    ) {
        let mut a = UintNArray::from_words(width, values.iter().copied()).unwrap();
        let before = a.buffer().to_vec();
        a.set(values.len() + extra, u32::MAX);
        prop_assert_eq!(a.buffer().to_vec(), before);
    }
}

proptest! {
    #[test]
    fn prop_iterator_matches_get(
        width in signed_width(),
        values in prop::collection::vec(any::<u32>(), 0..200)
    ) {
        let a = UintNArray::from_words(width, values.iter().copied()).unwrap();
        let by_index: Vec<u32> = (0..a.len()).filter_map(|i| a.get(i)).collect();
        prop_assert_eq!(a.to_vec(), by_index.clone());

        let mut reversed: Vec<u32> = a.words().rev().collect();
        reversed.reverse();
        prop_assert_eq!(reversed, by_index);
    }
}

//
// -----------------------------------------------------------------------------
// Buffer Views
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_default_lengths(width in 1i8..=32, bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let bits = bytes.len() * 8;
        let buffer = ByteBuffer::wrap(bytes);
        let w = width as usize;

        let left = UintNArray::from_buffer(width, buffer.clone(), None, None).unwrap();
        prop_assert_eq!(left.len(), bits / w);
        prop_assert_eq!(left.max_length(), bits / w);

        let right = UintNArray::from_buffer(-width, buffer, None, None).unwrap();
        prop_assert_eq!(right.len(), bits.div_ceil(w));
        prop_assert_eq!(right.alignment(), Alignment::Right);
    }
}

proptest! {
    #[test]
    fn prop_right_view_ends_on_last_bit(
        width in 1i8..=32,
        bytes in prop::collection::vec(any::<u8>(), 1..64)
    ) {
        let buffer = ByteBuffer::wrap(bytes.clone());
        let right = UintNArray::from_buffer(-width, buffer, None, None).unwrap();
        let w = width as usize;

        // the last word is the buffer's low bits
        let tail = bytes.iter().rev().take(4).rev().fold(0u64, |acc, &b| (acc << 8) | b as u64);
        let expected = (tail & mask(width) as u64) as u32;
        prop_assert_eq!(right.get(right.len() - 1), Some(expected));
        prop_assert_eq!(right.bit_offset() + (right.len() * w) as isize, (bytes.len() * 8) as isize);
    }
}

proptest! {
    #[test]
    fn prop_subarray_matches_slice(
        width in signed_width(),
        values in prop::collection::vec(any::<u32>(), 0..60),
        begin in -80isize..80,
        end in -80isize..80
    ) {
        let a = UintNArray::from_words(width, values.iter().copied()).unwrap();
        let view = a.subarray(begin..end);
        let copy = a.slice(begin..end);

        prop_assert_eq!(&view, &copy);
        prop_assert!(view.buffer().ptr_eq(a.buffer()));
        prop_assert!(!copy.buffer().ptr_eq(a.buffer()));
    }
}

proptest! {
    #[test]
    fn prop_subarray_composes(
        values in prop::collection::vec(any::<u32>(), 0..60),
        a0 in 0isize..60, a1 in 0isize..60,
        b0 in 0isize..60, b1 in 0isize..60
    ) {
        let a = UintNArray::from_words(-13, values.iter().copied()).unwrap();
        let nested = a.subarray(a0..a1).subarray(b0..b1);

        let outer = a.subarray(a0..a1).len() as isize;
        let start = a0.min(values.len() as isize) + b0.min(outer);
        let end = a0.min(values.len() as isize) + b1.min(outer).max(b0.min(outer));
        prop_assert_eq!(nested, a.subarray(start..end));
    }
}

proptest! {
    #[test]
    fn prop_trim_zeros_keeps_a_word(
        width in signed_width(),
        zeros in 0usize..10,
        values in prop::collection::vec(any::<u32>(), 0..20)
    ) {
        let padding = std::iter::repeat_n(0u32, zeros);
        let words: Vec<u32> = if width < 0 {
            padding.chain(values).collect()
        } else {
            values.into_iter().chain(padding).collect()
        };
        let a = UintNArray::from_words(width, words.iter().copied()).unwrap();
        let trimmed = a.trim_zeros();

        prop_assert_eq!(trimmed.is_empty(), a.is_empty());
        prop_assert!(trimmed.len() <= a.len());
        prop_assert!(trimmed.buffer().ptr_eq(a.buffer()));

        if trimmed.len() > 1 {
            let edge = match trimmed.alignment() {
                Alignment::Right => trimmed.get(0),
                Alignment::Left => trimmed.get(trimmed.len() - 1),
            };
            prop_assert_ne!(edge, Some(0));
        }
    }
}

proptest! {
    #[test]
    fn prop_base_change_preserves_words(
        from in 1i8..=32,
        to in 1i8..=32,
        values in prop::collection::vec(any::<u32>(), 1..40)
    ) {
        let a = UintNArray::from_words(-from, values.iter().copied()).unwrap();
        let bits = values.len() * from as usize;

        // copy into a fresh array of the other width, then come back
        let converted = UintNArray::from_words(-to, &a.reinterpret(-to, None).unwrap()).unwrap();
        let back = converted.reinterpret(-from, Some(bits)).unwrap();

        prop_assert_eq!(back.len(), values.len());
        prop_assert_eq!(back, a);
    }
}

//
// -----------------------------------------------------------------------------
// File-backed Views
// -----------------------------------------------------------------------------

#[cfg(feature = "mmap")]
proptest! {
    #[test]
    fn prop_mmap_writes_reach_file(
        width in signed_width(),
        values in prop::collection::vec(any::<u32>(), 1..100)
    ) {
        use std::io::Write;

        let bits = values.len() * width.unsigned_abs() as usize;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&vec![0u8; bits.div_ceil(8)]).unwrap();
        file.flush().unwrap();

        {
            let buffer = ByteBuffer::map_file(file.path()).unwrap();
            let mut a = UintNArray::from_buffer(width, buffer, None, Some(values.len())).unwrap();
            a.set_from(values.iter().copied(), 0).unwrap();
        }

        let reread = ByteBuffer::wrap(std::fs::read(file.path()).unwrap());
        let b = UintNArray::from_buffer(width, reread, None, Some(values.len())).unwrap();
        let expected = UintNArray::from_words(width, values.iter().copied()).unwrap();
        prop_assert_eq!(b, expected);
    }
}
