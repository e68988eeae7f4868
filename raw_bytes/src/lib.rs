//! # raw_bytes
//!
//! Fixed-length byte storage shared between several readers and writers.
//!
//! ```rust
//! use raw_bytes::ByteBuffer;
//!
//! let buffer = ByteBuffer::allocate(4);
//! let alias = buffer.clone();
//!
//! buffer.bytes_mut()[0] = 0xAB;
//! assert_eq!(alias.read_byte(0), Some(0xAB));
//! assert!(buffer.ptr_eq(&alias));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod buffer;
pub mod error;
#[doc(hidden)]
pub mod storage;

pub use buffer::ByteBuffer;
pub use error::BufferError;
pub use storage::Storage;
