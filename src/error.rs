//! Error signaling shared by the integer decoder and encoder.

use thiserror::Error;

/// Conditions reported by the HPACK integer codec.
///
/// [`Error::NeedsMore`] is the expected outcome of streaming use and is
/// never a failure: feed more input (or capacity) and call again.
/// [`Error::TooLarge`] is a protocol violation and ends the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Not enough input octets (decode) or destination capacity (encode)
    /// to make further progress.
    #[error("needs more")]
    NeedsMore,

    /// The encoded integer does not fit in 64 unsigned bits.
    #[error("integer exceeds the u64 range")]
    TooLarge,

    /// Prefix width outside `1..=8`.
    #[error("invalid prefix width {0}, expected 1..=8")]
    InvalidPrefixBits(u8),

    /// The destination buffer refused to grow.
    #[error("destination buffer of {len} octets cannot grow by {requested}")]
    Grow { requested: usize, len: usize },
}

impl Error {
    pub fn is_needs_more(&self) -> bool {
        matches!(self, Error::NeedsMore)
    }

    pub fn is_too_large(&self) -> bool {
        matches!(self, Error::TooLarge)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
