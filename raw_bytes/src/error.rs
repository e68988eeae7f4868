#[cfg(feature = "std")]
use thiserror::Error;

/// Buffer errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BufferError {
    /// IO error while mapping a file (only available in std builds)
    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Byte index past the end of the buffer
    #[cfg_attr(feature = "std", error("Byte index {index} out of bounds for length {len}"))]
    OutOfBounds { index: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferError::OutOfBounds { index, len } => {
                write!(f, "Byte index {} out of bounds for length {}", index, len)
            }
        }
    }
}
