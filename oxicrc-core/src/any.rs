//! Runtime-width CRC engines.
//!
//! The generic [`Crc`] fixes its state word at compile time. When the
//! register width is only known at run time — parameters parsed from a
//! command line, a catalogue lookup — [`AnyCrc`] selects the narrowest
//! state word that holds the requested width and hides the choice behind a
//! `u64`-facing API. Values wider than the register are accepted and
//! masked; results come back zero-extended.

use std::io;

use crate::engine::Crc;
use crate::error::Result;
use crate::model::{Algorithm, CrcModel};
use crate::stream::CrcStream;
use crate::traits::CrcWord;

/// A CRC engine whose state-word width is chosen at run time.
#[derive(Debug, Clone)]
pub enum AnyCrc {
    /// Engine over an 8-bit state word (bitsize 1..=8).
    Width8(Crc<u8>),
    /// Engine over a 16-bit state word (bitsize 9..=16).
    Width16(Crc<u16>),
    /// Engine over a 32-bit state word (bitsize 17..=32).
    Width32(Crc<u32>),
    /// Engine over a 64-bit state word (bitsize 33..=64).
    Width64(Crc<u64>),
}

/// Expands `$body` once per width variant, binding the inner engine.
macro_rules! each_width {
    ($any:expr, $crc:ident => $body:expr) => {
        match $any {
            AnyCrc::Width8($crc) => $body,
            AnyCrc::Width16($crc) => $body,
            AnyCrc::Width32($crc) => $body,
            AnyCrc::Width64($crc) => $body,
        }
    };
}

impl AnyCrc {
    /// Builds an engine for arbitrary model parameters, choosing the
    /// narrowest state word that holds `bitsize`. High bits of the value
    /// parameters beyond `bitsize` are ignored.
    ///
    /// # Errors
    ///
    /// The same validation as [`CrcModel::new`], with `bitsize` checked
    /// against the widest supported register (64 bits).
    pub fn new(
        bitsize: u32,
        polynomial: u64,
        initial_crc: u64,
        reflect_input: bool,
        reflect_output: bool,
        xor_output: u64,
        algorithm: Algorithm,
    ) -> Result<Self> {
        Self::build(
            bitsize,
            polynomial,
            initial_crc,
            reflect_input,
            reflect_output,
            xor_output,
            algorithm,
            true,
        )
    }

    /// Like [`new`](Self::new) but the engine never allocates; see
    /// [`Crc::tableless`].
    pub fn tableless(
        bitsize: u32,
        polynomial: u64,
        initial_crc: u64,
        reflect_input: bool,
        reflect_output: bool,
        xor_output: u64,
        algorithm: Algorithm,
    ) -> Result<Self> {
        Self::build(
            bitsize,
            polynomial,
            initial_crc,
            reflect_input,
            reflect_output,
            xor_output,
            algorithm,
            false,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        bitsize: u32,
        polynomial: u64,
        initial_crc: u64,
        reflect_input: bool,
        reflect_output: bool,
        xor_output: u64,
        algorithm: Algorithm,
        build_on_demand: bool,
    ) -> Result<Self> {
        fn make<W: CrcWord>(
            bitsize: u32,
            polynomial: u64,
            initial_crc: u64,
            reflect_input: bool,
            reflect_output: bool,
            xor_output: u64,
            algorithm: Algorithm,
            build_on_demand: bool,
        ) -> Result<Crc<W>> {
            let model = CrcModel::new(
                bitsize,
                W::from_u64(polynomial),
                W::from_u64(initial_crc),
                reflect_input,
                reflect_output,
                W::from_u64(xor_output),
            )?;
            Ok(if build_on_demand {
                Crc::new(model, algorithm)
            } else {
                Crc::tableless(model, algorithm)
            })
        }

        // Widths of 0 or above 64 fall into the widest arm, whose model
        // constructor rejects them against the 64-bit maximum.
        Ok(match bitsize {
            1..=8 => Self::Width8(make(
                bitsize,
                polynomial,
                initial_crc,
                reflect_input,
                reflect_output,
                xor_output,
                algorithm,
                build_on_demand,
            )?),
            9..=16 => Self::Width16(make(
                bitsize,
                polynomial,
                initial_crc,
                reflect_input,
                reflect_output,
                xor_output,
                algorithm,
                build_on_demand,
            )?),
            17..=32 => Self::Width32(make(
                bitsize,
                polynomial,
                initial_crc,
                reflect_input,
                reflect_output,
                xor_output,
                algorithm,
                build_on_demand,
            )?),
            _ => Self::Width64(make(
                bitsize,
                polynomial,
                initial_crc,
                reflect_input,
                reflect_output,
                xor_output,
                algorithm,
                build_on_demand,
            )?),
        })
    }

    /// Register width in bits.
    pub fn bitsize(&self) -> u32 {
        each_width!(self, crc => crc.model().bitsize())
    }

    /// Generator polynomial, zero-extended.
    pub fn polynomial(&self) -> u64 {
        each_width!(self, crc => crc.model().polynomial().to_u64())
    }

    /// The CRC value that seeds a fresh stream, zero-extended.
    pub fn initial_crc(&self) -> u64 {
        each_width!(self, crc => crc.model().initial_crc().to_u64())
    }

    /// Output XOR value, zero-extended.
    pub fn xor_output(&self) -> u64 {
        each_width!(self, crc => crc.model().xor_output().to_u64())
    }

    /// Whether input bytes are folded in LSB-first.
    pub fn reflect_input(&self) -> bool {
        each_width!(self, crc => crc.model().reflect_input())
    }

    /// Whether the final remainder is bit-reversed.
    pub fn reflect_output(&self) -> bool {
        each_width!(self, crc => crc.model().reflect_output())
    }

    /// The configured strategy, after slice-width narrowing.
    pub fn algorithm(&self) -> Algorithm {
        each_width!(self, crc => crc.algorithm())
    }

    /// The strategy updates will actually run.
    pub fn effective_algorithm(&self) -> Algorithm {
        each_width!(self, crc => crc.effective_algorithm())
    }

    /// Builds and attaches the lookup table now; see
    /// [`Crc::prepare_table`].
    pub fn prepare_table(&self) {
        each_width!(self, crc => {
            crc.prepare_table();
        })
    }

    /// Computes the CRC of `bytes` in one call, zero-extended.
    pub fn compute(&self, bytes: &[u8]) -> u64 {
        each_width!(self, crc => crc.compute(bytes).to_u64())
    }

    /// Opens a stream seeded with the model's initial CRC.
    pub fn stream(&self) -> AnyCrcStream<'_> {
        match self {
            Self::Width8(crc) => AnyCrcStream::Width8(crc.stream()),
            Self::Width16(crc) => AnyCrcStream::Width16(crc.stream()),
            Self::Width32(crc) => AnyCrcStream::Width32(crc.stream()),
            Self::Width64(crc) => AnyCrcStream::Width64(crc.stream()),
        }
    }

    /// Opens a stream that continues from a previously finished CRC value
    /// and byte count. High bits of `crc` beyond the register are ignored.
    pub fn stream_from(&self, crc: u64, total: u64) -> AnyCrcStream<'_> {
        match self {
            Self::Width8(c) => AnyCrcStream::Width8(c.stream_from(CrcWord::from_u64(crc), total)),
            Self::Width16(c) => AnyCrcStream::Width16(c.stream_from(CrcWord::from_u64(crc), total)),
            Self::Width32(c) => AnyCrcStream::Width32(c.stream_from(CrcWord::from_u64(crc), total)),
            Self::Width64(c) => AnyCrcStream::Width64(c.stream_from(CrcWord::from_u64(crc), total)),
        }
    }
}

/// A running CRC stream over a runtime-width engine.
#[derive(Debug, Clone)]
pub enum AnyCrcStream<'a> {
    /// Stream over an 8-bit state word.
    Width8(CrcStream<'a, u8>),
    /// Stream over a 16-bit state word.
    Width16(CrcStream<'a, u16>),
    /// Stream over a 32-bit state word.
    Width32(CrcStream<'a, u32>),
    /// Stream over a 64-bit state word.
    Width64(CrcStream<'a, u64>),
}

macro_rules! each_stream {
    ($any:expr, $stream:ident => $body:expr) => {
        match $any {
            AnyCrcStream::Width8($stream) => $body,
            AnyCrcStream::Width16($stream) => $body,
            AnyCrcStream::Width32($stream) => $body,
            AnyCrcStream::Width64($stream) => $body,
        }
    };
}

impl AnyCrcStream<'_> {
    /// Folds `bytes` into the running state.
    pub fn update(&mut self, bytes: &[u8]) {
        each_stream!(self, stream => stream.update(bytes))
    }

    /// The CRC of everything folded in so far, zero-extended. Further
    /// updates remain valid.
    pub fn finish(&self) -> u64 {
        each_stream!(self, stream => stream.finish().to_u64())
    }

    /// The digest packed MSB-first into the fewest whole bytes that hold
    /// the register.
    pub fn digest(&self) -> Vec<u8> {
        each_stream!(self, stream => stream.digest())
    }

    /// The digest as lowercase, zero-padded hexadecimal.
    pub fn hexdigest(&self) -> String {
        each_stream!(self, stream => stream.hexdigest())
    }

    /// Restarts the stream from the model's initial CRC.
    pub fn reset(&mut self) {
        each_stream!(self, stream => stream.reset())
    }

    /// Restarts the stream from a previously finished CRC value and byte
    /// count.
    pub fn reset_with(&mut self, crc: u64, total: u64) {
        each_stream!(self, stream => stream.reset_with(CrcWord::from_u64(crc), total))
    }

    /// Bytes folded in since the stream (re)started.
    pub fn total(&self) -> u64 {
        each_stream!(self, stream => stream.total())
    }
}

impl io::Write for AnyCrcStream<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
