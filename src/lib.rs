//! hpack-integer: A resumable, sans-I/O HPACK integer codec
//!
//! This crate implements the integer representation of HPACK (RFC 7541
//! Section 5.1), the prefixed variable-length integers HTTP/2 header blocks
//! use for string lengths, table indices and size updates. Both directions
//! are explicit state machines that can be fed partial input or partial
//! output capacity and resumed later.
//!
//! # Features
//!
//! - **Sans-I/O Design**: No runtime, no blocking; "needs more" is an ordinary return value
//! - **Resumable**: Splitting input or output at any octet boundary gives identical results
//! - **Overflow Safe**: Encodings that exceed `u64` are rejected, never wrapped
//! - **Flag Friendly**: Bits above the prefix in the first octet are preserved
//! - **Growable Destinations**: Encode straight into `Vec<u8>`, `BytesMut`, or your own buffer
//!
//! # Quick Start
//!
//! ```rust
//! use hpack_integer::{IntegerDecoder, IntegerEncoder, required_octets};
//!
//! // Encode 1337 with a 5-bit prefix into a pre-sized buffer
//! let mut out = vec![0u8; required_octets(1337, 5)];
//! let encoded = IntegerEncoder::new(1337, 5).encode(&mut out);
//! assert!(encoded.is_complete());
//! assert_eq!(out, [0x1F, 0x9A, 0x0A]);
//!
//! // Decode it again, one octet at a time
//! let mut decoder = IntegerDecoder::new(5);
//! for octet in &out {
//!     decoder.decode(std::slice::from_ref(octet));
//! }
//! assert_eq!(decoder.value(), Some(1337));
//! ```
//!
//! # Architecture
//!
//! This crate is intentionally minimal. It provides:
//! - Octet counting (`required_octets`, `max_prefix_value`)
//! - A resumable decoder and encoder
//! - One-shot helpers for fully buffered data
//!
//! It does NOT provide:
//! - Header tables or literal header assembly
//! - Huffman string coding
//! - HTTP/2 framing

pub mod buffer;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod oneshot;
pub mod prefix;

pub use buffer::{BoundedBuffer, GrowableBuffer};
pub use decoder::{Decoded, IntegerDecoder};
pub use encoder::{Encoded, IntegerEncoder};
pub use error::{Error, Result};
pub use oneshot::{decode_integer, encode_integer, encode_integer_to_vec};
pub use prefix::{max_prefix_value, required_octets, PrefixBits};
