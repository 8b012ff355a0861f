//! Resumable HPACK integer encoder.
//!
//! RFC 7541 Section 5.1 pseudocode:
//!
//! ```text
//! if I < 2^N - 1, encode I on N bits
//! else
//!     encode (2^N - 1) on N bits
//!     I = I - (2^N - 1)
//!     while I >= 128
//!          encode (I % 128 + 128) on 8 bits
//!          I = I / 128
//!     encode I on 8 bits
//! ```
//!
//! Destination capacity may arrive in pieces; the encoder remembers the
//! not-yet-written remainder between calls.

use crate::buffer::GrowableBuffer;
use crate::error::{Error, Result};
use crate::prefix::{continuation_octets, required_octets, PrefixBits, CONTINUATION_BIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing written yet.
    First { value: u64 },
    /// Sentinel written; `rest` still has base-128 digits pending.
    Continuation { rest: u64 },
    /// Only the terminal octet is left.
    Final { rest: u8 },
    Done,
}

/// Outcome of one [`IntegerEncoder::encode`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    /// Octets written by this call.
    pub written: usize,
    pub result: Result<()>,
}

impl Encoded {
    fn complete(written: usize) -> Self {
        Self { written, result: Ok(()) }
    }

    fn pending(written: usize) -> Self {
        Self { written, result: Err(Error::NeedsMore) }
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_ok()
    }

    pub fn needs_more(&self) -> bool {
        matches!(self.result, Err(Error::NeedsMore))
    }
}

/// Writes one prefixed integer into destination windows of any size.
///
/// The first octet keeps whatever bits the caller placed above the prefix,
/// so representation flags (e.g. `0x80` for an indexed header field) can be
/// set before encoding.
///
/// ```rust
/// use hpack_integer::IntegerEncoder;
///
/// let mut out = [0u8; 3];
/// let mut encoder = IntegerEncoder::new(1337, 5);
///
/// let first = encoder.encode(&mut out[..2]);
/// assert_eq!(first.written, 2);
/// assert!(first.needs_more());
///
/// let rest = encoder.encode(&mut out[2..]);
/// assert_eq!(rest.written, 1);
/// assert!(rest.is_complete());
/// assert_eq!(out, [0x1F, 0x9A, 0x0A]);
/// ```
#[derive(Debug, Clone)]
pub struct IntegerEncoder {
    prefix: PrefixBits,
    state: State,
}

impl IntegerEncoder {
    /// Create an encoder for `value` with a `prefix_bits`-wide prefix.
    ///
    /// # Panics
    ///
    /// Panics if `prefix_bits` is not in `1..=8`.
    pub fn new(value: u64, prefix_bits: u8) -> Self {
        match PrefixBits::new(prefix_bits) {
            Ok(prefix) => Self::with_prefix(value, prefix),
            Err(_) => panic!("prefix_bits must be 1-8, got {prefix_bits}"),
        }
    }

    pub fn try_new(value: u64, prefix_bits: u8) -> Result<Self> {
        PrefixBits::new(prefix_bits).map(|prefix| Self::with_prefix(value, prefix))
    }

    pub fn with_prefix(value: u64, prefix: PrefixBits) -> Self {
        Self { prefix, state: State::First { value } }
    }

    pub fn prefix_bits(&self) -> u8 {
        self.prefix.get()
    }

    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Octets still to be written before the encoder is done.
    pub fn remaining_octets(&self) -> usize {
        match self.state {
            State::First { value } => required_octets(value, self.prefix.get()),
            State::Continuation { rest } => continuation_octets(rest),
            State::Final { .. } => 1,
            State::Done => 0,
        }
    }

    /// Write as much of the integer as fits in `dst`.
    ///
    /// Only the low prefix bits of the first octet are touched. An empty
    /// `dst` reports [`Error::NeedsMore`] without changing state; a finished
    /// encoder writes nothing and reports success.
    pub fn encode(&mut self, dst: &mut [u8]) -> Encoded {
        let mut written = 0;
        let mut rest = match self.state {
            State::Done => return Encoded::complete(0),
            _ if dst.is_empty() => return Encoded::pending(0),
            State::First { value } => {
                let max = self.prefix.max_value();
                let mask = self.prefix.mask();
                dst[0] &= !mask;
                written = 1;
                if value < max {
                    dst[0] |= value as u8;
                    self.state = State::Done;
                    return Encoded::complete(written);
                }
                dst[0] |= mask;
                value - max
            }
            State::Continuation { rest } => rest,
            State::Final { rest } => u64::from(rest),
        };

        while rest >= 128 {
            let Some(slot) = dst.get_mut(written) else {
                tracing::trace!(rest, written, "hpack integer needs more capacity");
                self.state = State::Continuation { rest };
                return Encoded::pending(written);
            };
            *slot = (rest % 128) as u8 | CONTINUATION_BIT;
            rest /= 128;
            written += 1;
        }

        let Some(slot) = dst.get_mut(written) else {
            tracing::trace!(rest, written, "hpack integer needs room for its final octet");
            self.state = State::Final { rest: rest as u8 };
            return Encoded::pending(written);
        };
        *slot = rest as u8;
        self.state = State::Done;
        Encoded::complete(written + 1)
    }

    /// Drive the encoder to completion at `offset` in a growable buffer.
    ///
    /// Writes into whatever room already follows `offset`, then grows the
    /// buffer by exactly the missing octets. Octets outside the written
    /// range are left alone. Returns the number of octets written.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is past the end of `buf`.
    pub fn encode_into<B>(&mut self, buf: &mut B, offset: usize) -> Result<usize>
    where
        B: GrowableBuffer + ?Sized,
    {
        assert!(
            offset <= buf.len(),
            "offset {offset} past end of buffer ({} octets)",
            buf.len()
        );

        let mut pos = offset;
        loop {
            let available = buf.len() - pos;
            let step = self.encode(buf.view(pos, available));
            pos += step.written;

            match step.result {
                Ok(()) => return Ok(pos - offset),
                Err(Error::NeedsMore) => {
                    let missing = self.remaining_octets();
                    tracing::debug!(missing, len = buf.len(), "growing destination buffer");
                    buf.grow(missing)?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
