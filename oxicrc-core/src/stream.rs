//! Streaming digest context.
//!
//! A [`CrcStream`] borrows its engine and carries only the running state
//! plus a byte counter, so any number of streams can share one engine (and
//! one lookup table). Finishing is non-destructive: a stream can be
//! inspected mid-flight and continue to accept input afterwards.

use std::io;

use crate::engine::Crc;
use crate::traits::CrcWord;

/// A running CRC over a byte stream.
///
/// Implements [`std::io::Write`], so data can be folded in with
/// [`std::io::copy`] or anything else that drives a writer.
///
/// # Example
///
/// ```
/// use oxicrc_core::{Algorithm, Crc32, CrcModel};
///
/// let model = CrcModel::new(32, 0x04C11DB7u32, 0, true, true, 0xFFFFFFFF).unwrap();
/// let crc = Crc32::new(model, Algorithm::SlicingBy4);
///
/// let mut stream = crc.stream();
/// stream.update(b"1234");
/// stream.update(b"56789");
/// assert_eq!(stream.finish(), 0xCBF43926);
/// assert_eq!(stream.hexdigest(), "cbf43926");
/// assert_eq!(stream.total(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct CrcStream<'a, W: CrcWord> {
    crc: &'a Crc<W>,
    state: W,
    total: u64,
}

impl<'a, W: CrcWord> CrcStream<'a, W> {
    pub(crate) fn new(crc: &'a Crc<W>) -> Self {
        Self {
            crc,
            state: crc.setup(crc.model().initial_crc()),
            total: 0,
        }
    }

    pub(crate) fn resumed(crc: &'a Crc<W>, value: W, total: u64) -> Self {
        Self {
            crc,
            state: crc.setup(value),
            total,
        }
    }

    /// The engine this stream evaluates.
    pub fn engine(&self) -> &'a Crc<W> {
        self.crc
    }

    /// Folds `bytes` into the running state.
    pub fn update(&mut self, bytes: &[u8]) {
        self.state = self.crc.update(self.state, bytes);
        self.total += bytes.len() as u64;
    }

    /// The CRC of everything folded in so far.
    ///
    /// Does not consume the stream; further updates remain valid.
    pub fn finish(&self) -> W {
        self.crc.finish(self.state)
    }

    /// The digest packed MSB-first into the fewest whole bytes that hold
    /// the register.
    pub fn digest(&self) -> Vec<u8> {
        let value = self.finish().to_u64();
        let len = (self.crc.model().bitsize() as usize).div_ceil(8);
        let mut bytes = Vec::with_capacity(len);
        let mut offset = 8 * len;
        while offset > 0 {
            offset -= 8;
            bytes.push((value >> offset) as u8);
        }
        bytes
    }

    /// The digest as lowercase, zero-padded hexadecimal.
    pub fn hexdigest(&self) -> String {
        self.digest().iter().map(|byte| format!("{byte:02x}")).collect()
    }

    /// Restarts the stream from the model's initial CRC.
    pub fn reset(&mut self) {
        self.state = self.crc.setup(self.crc.model().initial_crc());
        self.total = 0;
    }

    /// Restarts the stream from a previously finished CRC value and byte
    /// count.
    pub fn reset_with(&mut self, value: W, total: u64) {
        self.state = self.crc.setup(value);
        self.total = total;
    }

    /// Bytes folded in since the stream (re)started.
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl<W: CrcWord> io::Write for CrcStream<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
