//! One-shot helpers for callers that already hold the whole input or know
//! the whole value. They run the resumable machines once, so the wire
//! output and error behaviour (overflow detection included) are identical.

use crate::decoder::IntegerDecoder;
use crate::encoder::IntegerEncoder;
use crate::error::{Error, Result};
use crate::prefix::required_octets;

/// Decode one integer from the start of `src`.
///
/// Returns the value and the number of octets it occupied. A truncated
/// encoding yields [`Error::NeedsMore`].
///
/// # Panics
///
/// Panics if `prefix_bits` is not in `1..=8`.
pub fn decode_integer(src: &[u8], prefix_bits: u8) -> Result<(u64, usize)> {
    let decoded = IntegerDecoder::new(prefix_bits).decode(src);
    decoded.result.map(|value| (value, decoded.consumed))
}

/// Encode `value` at the start of `dst`, keeping the non-prefix bits of
/// `dst[0]`.
///
/// If `dst` is shorter than [`required_octets`] nothing is written and
/// [`Error::NeedsMore`] is returned.
///
/// # Panics
///
/// Panics if `prefix_bits` is not in `1..=8`.
pub fn encode_integer(value: u64, prefix_bits: u8, dst: &mut [u8]) -> Result<usize> {
    let needed = required_octets(value, prefix_bits);
    if dst.len() < needed {
        return Err(Error::NeedsMore);
    }
    let encoded = IntegerEncoder::new(value, prefix_bits).encode(dst);
    encoded.result.map(|()| encoded.written)
}

/// Append `value` to `dst`, with `flags` in the bits above the prefix of
/// the first octet. Flag bits that fall inside the prefix are dropped.
///
/// ```rust
/// // Indexed header field, static index 2 (:method: GET)
/// let mut block = Vec::new();
/// hpack_integer::encode_integer_to_vec(2, 7, 0x80, &mut block).unwrap();
/// assert_eq!(block, [0x82]);
/// ```
///
/// # Panics
///
/// Panics if `prefix_bits` is not in `1..=8`.
pub fn encode_integer_to_vec(value: u64, prefix_bits: u8, flags: u8, dst: &mut Vec<u8>) -> Result<usize> {
    let start = dst.len();
    let needed = required_octets(value, prefix_bits);
    dst.try_reserve(needed)
        .map_err(|_| Error::Grow { requested: needed, len: start })?;
    dst.push(flags);

    let result = IntegerEncoder::new(value, prefix_bits).encode_into(&mut *dst, start);
    if result.is_err() {
        dst.truncate(start);
    }
    result
}
