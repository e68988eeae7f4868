//! # uintn
//!
//! Typed arrays of unsigned words of any width from 1 to 32 bits, packed
//! most-significant-bit first into a shared byte buffer.
//!
//! ```rust
//! use uintn::UintNArray;
//!
//! // 5-bit base32 digits of the geohash "9q8yy9mf"
//! let digits = UintNArray::from_words(5, [9, 22, 8, 30, 30, 9, 19, 14]).unwrap();
//! assert_eq!(digits.buffer().byte_length(), 5);
//!
//! // the same 40 bits as two 20-bit halves
//! let halves = digits.reinterpret(20, None).unwrap();
//! assert_eq!(halves.len(), 2);
//! ```
//!
//! ## Right alignment
//!
//! A negative width packs words against the end of the buffer, so numbers
//! stored in one base survive being viewed in another:
//!
//! ```rust
//! use uintn::{Alignment, UintNArray};
//!
//! let base512 = UintNArray::from_words(-9, [1, 1]).unwrap();
//! let base128 = base512.reinterpret(-7, None).unwrap().trim_zeros();
//! assert_eq!(base128.to_string(), "4,1");
//! assert_eq!(base128.alignment(), Alignment::Right);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::UintNError;

mod bit_ops;

pub mod alignment;
pub use alignment::Alignment;

pub mod array;
pub use array::{Source, UintNArray};

pub mod seq;
pub use seq::{WordIter, WordSeq};

mod view;

pub use raw_bytes::ByteBuffer;
