use alloc::vec::Vec;

#[cfg(feature = "mmap")]
use std::{fs::File, path::Path};

#[cfg(feature = "mmap")]
use memmap2::MmapMut;

#[cfg(feature = "mmap")]
use crate::BufferError;

/// The low-level backend holding the bytes.
///
/// - Always includes in-memory `Vec<u8>`
/// - Includes a writable file mapping only when feature = "mmap"
///
/// The length of a backend never changes once it is created.
#[derive(Debug)]
pub enum Storage {
    /// Heap bytes, zero-filled or taken over from the caller
    InMemory(Vec<u8>),

    /// Read-write memory mapped file
    #[cfg(feature = "mmap")]
    MmapReadWrite(MmapMut),
}

impl Storage {
    /// Zero-filled in-memory storage of `byte_length` bytes
    pub fn zeroed(byte_length: usize) -> Self {
        Storage::InMemory(alloc::vec![0u8; byte_length])
    }

    /// Return byte count
    pub fn len(&self) -> usize {
        match self {
            Storage::InMemory(vec) => vec.len(),

            #[cfg(feature = "mmap")]
            Storage::MmapReadWrite(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        match self {
            Storage::InMemory(vec) => vec.as_slice(),

            #[cfg(feature = "mmap")]
            Storage::MmapReadWrite(m) => m.as_ref(),
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Storage::InMemory(vec) => vec.as_mut_slice(),

            #[cfg(feature = "mmap")]
            Storage::MmapReadWrite(m) => m.as_mut(),
        }
    }

    //  Mmap constructors

    #[cfg(feature = "mmap")]
    pub fn from_mmap_readwrite(path: &Path) -> Result<Self, BufferError> {
        let file = File::options().read(true).write(true).open(path)?;
        let mmap = unsafe { MmapMut::map_mut(&file)? };
        Ok(Storage::MmapReadWrite(mmap))
    }
}
