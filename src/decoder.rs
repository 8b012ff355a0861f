//! Resumable HPACK integer decoder.
//!
//! RFC 7541 Section 5.1 pseudocode:
//!
//! ```text
//! decode I from the next N bits
//! if I < 2^N - 1, return I
//! else
//!     M = 0
//!     repeat
//!         B = next octet
//!         I = I + (B & 127) * 2^M
//!         M = M + 7
//!     while B & 128 == 128
//!     return I
//! ```
//!
//! The decoder runs that loop over whatever octets are available and
//! parks `(I, M)` when the input runs dry, so a value split across several
//! socket reads decodes exactly like one delivered whole.

use crate::error::{Error, Result};
use crate::prefix::{PrefixBits, CONTINUATION_BIT, CONTINUATION_MASK};

/// Shift of the last continuation octet that can still carry a u64 bit.
/// Anything past it is rejected, zero padding included.
const MAX_SHIFT: u32 = 63;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for the prefix octet.
    First,
    /// Prefix held the sentinel; accumulating continuation octets.
    Continuation { value: u64, shift: u32 },
    Done { value: u64 },
    /// Overflowed u64. Terminal.
    Failed,
}

/// Outcome of one [`IntegerDecoder::decode`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Octets consumed by this call.
    pub consumed: usize,
    /// The decoded value once complete, otherwise why decoding stopped.
    pub result: Result<u64>,
}

impl Decoded {
    fn complete(consumed: usize, value: u64) -> Self {
        Self { consumed, result: Ok(value) }
    }

    fn pending(consumed: usize) -> Self {
        Self { consumed, result: Err(Error::NeedsMore) }
    }

    fn too_large(consumed: usize) -> Self {
        Self { consumed, result: Err(Error::TooLarge) }
    }

    pub fn value(&self) -> Option<u64> {
        self.result.ok()
    }

    pub fn needs_more(&self) -> bool {
        matches!(self.result, Err(Error::NeedsMore))
    }
}

/// Decodes one prefixed integer from octets delivered in any number of
/// pieces.
///
/// ```rust
/// use hpack_integer::IntegerDecoder;
///
/// let mut decoder = IntegerDecoder::new(5);
/// let first = decoder.decode(&[0x1F, 0x9A]);
/// assert_eq!(first.consumed, 2);
/// assert!(first.needs_more());
///
/// let rest = decoder.decode(&[0x0A]);
/// assert_eq!(rest.consumed, 1);
/// assert_eq!(rest.result, Ok(1337));
/// ```
#[derive(Debug, Clone)]
pub struct IntegerDecoder {
    prefix: PrefixBits,
    state: State,
}

impl IntegerDecoder {
    /// Create a decoder for a `prefix_bits`-wide prefix.
    ///
    /// # Panics
    ///
    /// Panics if `prefix_bits` is not in `1..=8`. Use [`IntegerDecoder::try_new`]
    /// when the width comes from untrusted input.
    pub fn new(prefix_bits: u8) -> Self {
        match PrefixBits::new(prefix_bits) {
            Ok(prefix) => Self::with_prefix(prefix),
            Err(_) => panic!("prefix_bits must be 1-8, got {prefix_bits}"),
        }
    }

    pub fn try_new(prefix_bits: u8) -> Result<Self> {
        PrefixBits::new(prefix_bits).map(Self::with_prefix)
    }

    pub fn with_prefix(prefix: PrefixBits) -> Self {
        Self { prefix, state: State::First }
    }

    pub fn prefix_bits(&self) -> u8 {
        self.prefix.get()
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done { .. })
    }

    /// The decoded value, once complete.
    pub fn value(&self) -> Option<u64> {
        match self.state {
            State::Done { value } => Some(value),
            _ => None,
        }
    }

    /// Feed the next octets of the encoded integer.
    ///
    /// Consumes only the octets that belong to this integer; anything after
    /// the terminal octet is left for the caller. A finished decoder
    /// consumes nothing and reports its value again. After
    /// [`Error::TooLarge`] every call reports `TooLarge` without consuming.
    pub fn decode(&mut self, src: &[u8]) -> Decoded {
        let (mut value, mut shift, mut consumed) = match self.state {
            State::Done { value } => return Decoded::complete(0, value),
            State::Failed => return Decoded::too_large(0),
            _ if src.is_empty() => return Decoded::pending(0),
            State::First => {
                let first = u64::from(src[0] & self.prefix.mask());
                if first < self.prefix.max_value() {
                    self.state = State::Done { value: first };
                    return Decoded::complete(1, first);
                }
                (first, 0, 1)
            }
            State::Continuation { value, shift } => (value, shift, 0),
        };

        for &octet in &src[consumed..] {
            if shift > MAX_SHIFT {
                tracing::debug!(value, shift, "hpack integer has too many continuation octets");
                self.state = State::Failed;
                return Decoded::too_large(consumed);
            }

            let chunk = u64::from(octet & CONTINUATION_MASK);
            let Some(next) = accumulate(value, chunk, shift) else {
                tracing::debug!(value, chunk, shift, "hpack integer overflows u64");
                self.state = State::Failed;
                return Decoded::too_large(consumed);
            };

            value = next;
            shift += 7;
            consumed += 1;

            if octet & CONTINUATION_BIT == 0 {
                self.state = State::Done { value };
                return Decoded::complete(consumed, value);
            }
        }

        tracing::trace!(value, shift, consumed, "hpack integer needs more input");
        self.state = State::Continuation { value, shift };
        Decoded::pending(consumed)
    }
}

/// `value + (chunk << shift)`, or `None` if any bit would leave the u64.
fn accumulate(value: u64, chunk: u64, shift: u32) -> Option<u64> {
    if chunk == 0 {
        return Some(value);
    }
    let contribution = chunk.checked_shl(shift)?;
    if contribution >> shift != chunk {
        return None;
    }
    value.checked_add(contribution)
}

// ============================================================================
// Tests
// ============================================================================
