//! Prefix widths and octet counting (RFC 7541 Section 5.1).
//!
//! An integer starts in the low N bits of its first octet. Values below
//! `2^N - 1` fit there; anything else writes the `2^N - 1` sentinel and
//! spills the remainder into base-128 continuation octets.

use crate::error::{Error, Result};

/// Marks a continuation octet that is followed by another one.
pub(crate) const CONTINUATION_BIT: u8 = 0x80;

/// Payload bits of a continuation octet.
pub(crate) const CONTINUATION_MASK: u8 = 0x7F;

/// A prefix width N in `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrefixBits(u8);

impl PrefixBits {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(bits: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(Error::InvalidPrefixBits(bits))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Sentinel value `2^N - 1`.
    pub fn max_value(self) -> u64 {
        (1u64 << self.0) - 1
    }

    /// The prefix field as an octet mask.
    pub(crate) fn mask(self) -> u8 {
        self.max_value() as u8
    }
}

impl TryFrom<u8> for PrefixBits {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self> {
        Self::new(bits)
    }
}

/// Largest value that fits in a `prefix_bits`-wide prefix, `2^N - 1`.
///
/// # Panics
///
/// Panics if `prefix_bits` is not in `1..=8`.
pub fn max_prefix_value(prefix_bits: u8) -> u64 {
    assert!(
        (PrefixBits::MIN..=PrefixBits::MAX).contains(&prefix_bits),
        "prefix_bits must be 1-8, got {prefix_bits}"
    );
    (1u64 << prefix_bits) - 1
}

/// Number of octets the encoder writes for `value` with a `prefix_bits`
/// prefix. Use it to size destination buffers up front.
///
/// # Panics
///
/// Panics if `prefix_bits` is not in `1..=8`.
pub fn required_octets(value: u64, prefix_bits: u8) -> usize {
    let max = max_prefix_value(prefix_bits);
    if value < max {
        return 1;
    }

    1 + continuation_octets(value - max)
}

/// Octets needed for the base-128 digits of `rest`, terminal octet included.
pub(crate) fn continuation_octets(mut rest: u64) -> usize {
    let mut count = 1;
    while rest >= 128 {
        rest /= 128;
        count += 1;
    }
    count
}
