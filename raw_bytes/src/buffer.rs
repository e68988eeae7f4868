use crate::{BufferError, Storage};
use alloc::rc::Rc;
use alloc::vec::Vec;
use bytemuck::Pod;
use core::cell::{Ref, RefCell, RefMut};

/// Shared handle to a fixed-length run of bytes.
///
/// Cloning a `ByteBuffer` does not copy the bytes: every clone refers to the
/// same storage, and a write through any of them is visible through all of
/// them. The storage lives as long as its longest-lived handle.
///
/// The handle uses `Rc<RefCell<_>>` and is therefore neither `Send` nor
/// `Sync`. Callers that need the bytes on another thread copy them out with
/// [`ByteBuffer::to_vec`].
///
/// # Storage Backends
///
/// - **In-memory**: zero-filled on [`ByteBuffer::allocate`], or a caller's
///   `Vec<u8>` taken over by [`ByteBuffer::wrap`]
/// - **Memory-mapped read-write** (feature `mmap`): writes land in the file
///
/// # Examples
///
/// ```
/// use raw_bytes::ByteBuffer;
///
/// let buffer = ByteBuffer::wrap(vec![0x12, 0x34]);
/// assert_eq!(buffer.byte_length(), 2);
/// assert_eq!(buffer.bit_length(), 16);
///
/// let alias = buffer.clone();
/// alias.bytes_mut()[1] = 0xFF;
/// assert_eq!(buffer.to_vec(), vec![0x12, 0xFF]);
/// ```
#[derive(Debug, Clone)]
pub struct ByteBuffer {
    inner: Rc<RefCell<Storage>>,
}

impl ByteBuffer {
    /// Allocates `byte_length` zero bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::ByteBuffer;
    ///
    /// let buffer = ByteBuffer::allocate(3);
    /// assert_eq!(buffer.to_vec(), vec![0, 0, 0]);
    /// ```
    pub fn allocate(byte_length: usize) -> Self {
        Self::from_storage(Storage::zeroed(byte_length))
    }

    /// Takes ownership of `bytes` without copying them.
    pub fn wrap(bytes: Vec<u8>) -> Self {
        Self::from_storage(Storage::InMemory(bytes))
    }

    /// Copies the in-memory representation of a plain-old-data slice.
    ///
    /// The byte order is the platform's; convert with `to_be` first for a
    /// portable layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::ByteBuffer;
    ///
    /// let words = [0x0102u16.to_be(), 0x0304u16.to_be()];
    /// let buffer = ByteBuffer::from_pod(&words);
    /// assert_eq!(buffer.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn from_pod<T: Pod>(values: &[T]) -> Self {
        Self::wrap(bytemuck::cast_slice::<T, u8>(values).to_vec())
    }

    /// Maps an existing file read-write; the file length becomes the buffer length.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be opened for writing or mapping fails.
    #[cfg(feature = "mmap")]
    pub fn map_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, BufferError> {
        Ok(Self::from_storage(Storage::from_mmap_readwrite(path.as_ref())?))
    }

    pub fn from_storage(storage: Storage) -> Self {
        ByteBuffer {
            inner: Rc::new(RefCell::new(storage)),
        }
    }

    #[inline]
    pub fn byte_length(&self) -> usize {
        self.inner.borrow().len()
    }

    #[inline]
    pub fn bit_length(&self) -> usize {
        self.byte_length() * 8
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.byte_length() == 0
    }

    /// Borrows the bytes for reading.
    ///
    /// # Panics
    ///
    /// Panics if a [`ByteBuffer::bytes_mut`] guard on the same storage is alive.
    pub fn bytes(&self) -> Ref<'_, [u8]> {
        Ref::map(self.inner.borrow(), |s| s.as_slice())
    }

    /// Borrows the bytes for writing.
    ///
    /// # Panics
    ///
    /// Panics if any other guard on the same storage is alive.
    pub fn bytes_mut(&self) -> RefMut<'_, [u8]> {
        RefMut::map(self.inner.borrow_mut(), |s| s.as_mut_slice())
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes().to_vec()
    }

    pub fn read_byte(&self, index: usize) -> Option<u8> {
        self.bytes().get(index).copied()
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::OutOfBounds` if `index >= byte_length()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::ByteBuffer;
    ///
    /// let buffer = ByteBuffer::allocate(2);
    /// buffer.write_byte(1, 7).unwrap();
    /// assert_eq!(buffer.to_vec(), vec![0, 7]);
    /// assert!(buffer.write_byte(2, 7).is_err());
    /// ```
    pub fn write_byte(&self, index: usize, value: u8) -> Result<(), BufferError> {
        let mut bytes = self.bytes_mut();
        let len = bytes.len();
        let slot = bytes
            .get_mut(index)
            .ok_or(BufferError::OutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// `true` when both handles refer to the same storage.
    pub fn ptr_eq(&self, other: &ByteBuffer) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles on this storage.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Returns the bytes if this is the only handle on an in-memory buffer,
    /// otherwise hands the buffer back unchanged.
    pub fn into_vec(self) -> Result<Vec<u8>, ByteBuffer> {
        match Rc::try_unwrap(self.inner) {
            Ok(cell) => match cell.into_inner() {
                Storage::InMemory(vec) => Ok(vec),
                #[cfg(feature = "mmap")]
                storage => Err(Self::from_storage(storage)),
            },
            Err(inner) => Err(ByteBuffer { inner }),
        }
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::allocate(0)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::wrap(bytes)
    }
}
