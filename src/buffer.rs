//! Growable destination buffers for the encoder.
//!
//! [`IntegerEncoder::encode_into`](crate::IntegerEncoder::encode_into) only
//! needs two things from its destination: a mutable window at an offset and
//! a way to extend the storage. Anything that provides them (a `Vec`, a
//! `BytesMut`, an arena slice, a mapped region) can receive encoded integers.

use crate::error::{Error, Result};

/// Destination storage that can hand out mutable windows and grow.
///
/// Growing may reallocate, so a window obtained before [`grow`] must not
/// outlive it. The `&mut self` receivers make the borrow checker enforce
/// that.
///
/// [`grow`]: GrowableBuffer::grow
pub trait GrowableBuffer {
    /// Current length in octets.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mutable window of `len` octets starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds [`GrowableBuffer::len`].
    fn view(&mut self, offset: usize, len: usize) -> &mut [u8];

    /// Extend the buffer by `additional` zeroed octets.
    ///
    /// Fails with [`Error::Grow`] when the storage cannot be extended.
    fn grow(&mut self, additional: usize) -> Result<()>;
}

impl GrowableBuffer for Vec<u8> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn view(&mut self, offset: usize, len: usize) -> &mut [u8] {
        &mut self[offset..offset + len]
    }

    fn grow(&mut self, additional: usize) -> Result<()> {
        let len = Vec::len(self);
        self.try_reserve(additional)
            .map_err(|_| Error::Grow { requested: additional, len })?;
        self.resize(len + additional, 0);
        Ok(())
    }
}

#[cfg(feature = "bytes")]
impl GrowableBuffer for bytes::BytesMut {
    fn len(&self) -> usize {
        bytes::BytesMut::len(self)
    }

    fn view(&mut self, offset: usize, len: usize) -> &mut [u8] {
        &mut self[offset..offset + len]
    }

    /// Fails only when the new length overflows `usize`. Allocation
    /// failure aborts, as for any `BytesMut` growth.
    fn grow(&mut self, additional: usize) -> Result<()> {
        let len = bytes::BytesMut::len(self);
        let new_len = len
            .checked_add(additional)
            .ok_or(Error::Grow { requested: additional, len })?;
        self.resize(new_len, 0);
        Ok(())
    }
}

/// A `Vec<u8>` that refuses to grow past a fixed limit.
///
/// Useful for capping how much a single header block may occupy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedBuffer {
    bytes: Vec<u8>,
    limit: usize,
}

impl BoundedBuffer {
    pub fn new(limit: usize) -> Self {
        Self { bytes: Vec::new(), limit }
    }

    /// Wrap existing contents. The limit is raised to at least their length.
    pub fn from_vec(bytes: Vec<u8>, limit: usize) -> Self {
        let limit = limit.max(bytes.len());
        Self { bytes, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }
}

impl GrowableBuffer for BoundedBuffer {
    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn view(&mut self, offset: usize, len: usize) -> &mut [u8] {
        self.bytes.view(offset, len)
    }

    fn grow(&mut self, additional: usize) -> Result<()> {
        let len = self.bytes.len();
        if additional > self.limit - len {
            tracing::warn!(len, additional, limit = self.limit, "bounded buffer refused to grow");
            return Err(Error::Grow { requested: additional, len });
        }
        self.bytes.grow(additional)
    }
}
