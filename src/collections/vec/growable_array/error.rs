/// Error returned by indexed access outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutOfRange {
    /// The index was at or past the element count.
    PastEnd {
        /// Requested index.
        index: usize,
        /// Element count at the time of access.
        len: usize,
    },
    /// A signed index was negative.
    Negative {
        /// Requested index.
        index: isize,
        /// Element count at the time of access.
        len: usize,
    },
}

impl core::fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::PastEnd { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Negative { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for IndexOutOfRange {}
