//! Output sinks for encoded data.
//!
//! Every encoder in the workspace writes through [`BlockSink`], so the same
//! code path serves growable buffers ([`Vec<u8>`]), fixed byte arrays ([`SliceSink`])
//! and streams ([`WriteSink`], `std` only). All multi-byte values are little-endian.

use crate::error::CodecError;
use alloc::vec::Vec;
use likely_stable::unlikely;

/// A destination that encoded bytes are appended to, in order.
pub trait BlockSink {
    /// Appends raw bytes.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError>;

    /// Appends a little-endian `u16`.
    #[inline]
    fn write_u16_le(&mut self, value: u16) -> Result<(), CodecError> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Appends a little-endian `u32`.
    #[inline]
    fn write_u32_le(&mut self, value: u32) -> Result<(), CodecError> {
        self.write_bytes(&value.to_le_bytes())
    }
}

impl BlockSink for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: BlockSink + ?Sized> BlockSink for &mut S {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        (**self).write_bytes(bytes)
    }
}

/// Writes into a caller-provided byte slice, front to back.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buffer: &'a mut [u8],
    position: usize,
}

impl<'a> SliceSink<'a> {
    /// Creates a sink that starts writing at the beginning of `buffer`.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes that can still be written.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }
}

impl BlockSink for SliceSink<'_> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let end = self.position + bytes.len();
        if unlikely(end > self.buffer.len()) {
            return Err(CodecError::OutputBufferTooSmall {
                needed: end,
                actual: self.buffer.len(),
            });
        }

        self.buffer[self.position..end].copy_from_slice(bytes);
        self.position = end;
        Ok(())
    }
}

/// Adapts any [`std::io::Write`] into a [`BlockSink`].
///
/// No buffering is added; wrap the writer in a [`std::io::BufWriter`] when
/// writing to a file.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct WriteSink<W: std::io::Write> {
    writer: W,
    written: usize,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> WriteSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> BlockSink for WriteSink<W> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.writer.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }
}
