use thiserror::Error;

/// Malformed Base32 input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A character outside `A-Z2-7`, or a `=` before the trailing padding.
    #[error("invalid base32 character {ch:?} at byte {index}")]
    InvalidCharacter { ch: char, index: usize },

    /// The final group holds 1, 3 or 6 symbols, which cannot end on a byte boundary.
    #[error("truncated base32 input: final group has {symbols} symbols")]
    TruncatedGroup { symbols: usize },
}
