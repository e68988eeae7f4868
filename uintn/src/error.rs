#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UintNError {
    #[cfg_attr(
        feature = "std",
        error("Bit width {0} must be between 1 and 32 in magnitude")
    )]
    InvalidBitWidth(i8),

    #[cfg_attr(feature = "std", error("Invalid array length: {0}"))]
    InvalidLength(usize),

    #[cfg_attr(
        feature = "std",
        error("Bit offset {bit_offset} is outside the bounds of the buffer (limit {limit})")
    )]
    BitOffsetOutOfBounds { bit_offset: usize, limit: usize },

    #[cfg_attr(
        feature = "std",
        error("Length {length} exceeds the {available} words available in the buffer")
    )]
    LengthOutOfBounds { length: usize, available: usize },

    #[cfg_attr(
        feature = "std",
        error("{count} words at offset {offset} do not fit in length {length}")
    )]
    OffsetOutOfBounds {
        offset: usize,
        count: usize,
        length: usize,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for UintNError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UintNError::InvalidBitWidth(w) => {
                write!(f, "Bit width {} must be between 1 and 32 in magnitude", w)
            }
            UintNError::InvalidLength(n) => write!(f, "Invalid array length: {}", n),
            UintNError::BitOffsetOutOfBounds { bit_offset, limit } => write!(
                f,
                "Bit offset {} is outside the bounds of the buffer (limit {})",
                bit_offset, limit
            ),
            UintNError::LengthOutOfBounds { length, available } => write!(
                f,
                "Length {} exceeds the {} words available in the buffer",
                length, available
            ),
            UintNError::OffsetOutOfBounds {
                offset,
                count,
                length,
            } => write!(
                f,
                "{} words at offset {} do not fit in length {}",
                count, offset, length
            ),
        }
    }
}
