//! CRC model parameters and evaluation-strategy selection.
//!
//! A [`CrcModel`] is the immutable parameter vector that identifies a CRC
//! variant: register width, generator polynomial, initial CRC, output XOR,
//! and the two reflection flags. It also carries the two state transforms
//! ([`setup`](CrcModel::setup) and [`finish`](CrcModel::finish)) that
//! translate between the user-visible CRC value and the internal register
//! convention shared by every update kernel: left-aligned within the state
//! word for non-reflected models, right-aligned for reflected ones. Keeping
//! that translation at the stream boundaries is what lets the kernels run
//! without per-byte reflection branches.

use crate::error::{CrcError, Result};
use crate::traits::CrcWord;

/// Evaluation strategy for a CRC computation.
///
/// All strategies compute the same function; they trade table memory for
/// throughput. The numeric identifiers follow the widespread convention
/// where non-negative values equal the number of 256-entry table columns:
///
/// | strategy | id | table |
/// |---|---|---|
/// | [`BitByBit`](Algorithm::BitByBit) | -2 | none |
/// | [`BitByBitFast`](Algorithm::BitByBitFast) | -1 | none |
/// | [`HalfbyteTable`](Algorithm::HalfbyteTable) | 0 | 16 entries |
/// | [`StandardTable`](Algorithm::StandardTable) | 1 | 256 entries |
/// | [`SlicingBy4`](Algorithm::SlicingBy4) | 4 | 4 x 256 entries |
/// | [`SlicingBy8`](Algorithm::SlicingBy8) | 8 | 8 x 256 entries |
/// | [`SlicingBy16`](Algorithm::SlicingBy16) | 16 | 16 x 256 entries |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Classic long division, one bit at a time. No table, slowest.
    BitByBit,
    /// One byte at a time using eight precomputed shifted polynomials.
    /// No table; the fallback strategy when no table can be attached.
    BitByBitFast,
    /// One nibble at a time through a 16-entry table.
    HalfbyteTable,
    /// One byte at a time through a 256-entry table.
    StandardTable,
    /// Four bytes per step through four 256-entry tables.
    SlicingBy4,
    /// Eight bytes per step through eight 256-entry tables.
    SlicingBy8,
    /// Sixteen bytes per step through sixteen 256-entry tables.
    SlicingBy16,
}

impl Algorithm {
    /// The conventional numeric identifier of this strategy.
    pub const fn id(self) -> i8 {
        match self {
            Self::BitByBit => -2,
            Self::BitByBitFast => -1,
            Self::HalfbyteTable => 0,
            Self::StandardTable => 1,
            Self::SlicingBy4 => 4,
            Self::SlicingBy8 => 8,
            Self::SlicingBy16 => 16,
        }
    }

    /// Looks up a strategy by its numeric identifier.
    pub fn from_id(id: i8) -> Result<Self> {
        match id {
            -2 => Ok(Self::BitByBit),
            -1 => Ok(Self::BitByBitFast),
            0 => Ok(Self::HalfbyteTable),
            1 => Ok(Self::StandardTable),
            4 => Ok(Self::SlicingBy4),
            8 => Ok(Self::SlicingBy8),
            16 => Ok(Self::SlicingBy16),
            _ => Err(CrcError::unknown_algorithm(id)),
        }
    }

    /// Number of table entries this strategy looks up, or `None` for the
    /// tableless strategies.
    pub const fn table_words(self) -> Option<usize> {
        match self {
            Self::BitByBit | Self::BitByBitFast => None,
            Self::HalfbyteTable => Some(16),
            Self::StandardTable => Some(256),
            Self::SlicingBy4 => Some(4 * 256),
            Self::SlicingBy8 => Some(8 * 256),
            Self::SlicingBy16 => Some(16 * 256),
        }
    }

    /// Whether this strategy needs a lookup table.
    pub const fn needs_table(self) -> bool {
        self.table_words().is_some()
    }

    /// Narrows a slicing strategy to the widest slice a `word_bits`-wide
    /// state word supports. A slice of N bytes displaces the register by
    /// 8N bits per step, so it needs a word of at least that many bits;
    /// narrower words step down until the strategy fits.
    pub(crate) fn fit_to_word(self, word_bits: u32) -> Self {
        let mut algorithm = self;
        loop {
            algorithm = match algorithm {
                Self::SlicingBy16 if word_bits < 128 => Self::SlicingBy8,
                Self::SlicingBy8 if word_bits < 64 => Self::SlicingBy4,
                Self::SlicingBy4 if word_bits < 32 => Self::StandardTable,
                fitted => return fitted,
            };
        }
    }
}

/// Immutable description of a CRC variant.
///
/// A model is constructed once, validated, and then shared freely; all
/// value parameters are masked to `bitsize` bits on entry, so callers may
/// pass wider integers without affecting the digest.
///
/// `initial_crc` is the user-visible CRC that seeds a fresh stream — that
/// is, the CRC of the empty message. Parameter catalogues that quote a raw
/// register init instead differ from this value by exactly `xor_output`.
///
/// # Example
///
/// ```
/// use oxicrc_core::{Algorithm, Crc32, CrcModel};
///
/// // CRC-32/ISO-HDLC as used by ZIP, GZIP and PNG.
/// let model = CrcModel::new(32, 0x04C11DB7u32, 0, true, true, 0xFFFFFFFF).unwrap();
/// let crc = Crc32::new(model, Algorithm::StandardTable);
/// assert_eq!(crc.compute(b"123456789"), 0xCBF43926);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcModel<W: CrcWord> {
    bitsize: u32,
    polynomial: W,
    initial_crc: W,
    xor_output: W,
    reflect_input: bool,
    reflect_output: bool,
}

impl<W: CrcWord> CrcModel<W> {
    /// Creates a model after validating the parameters.
    ///
    /// # Errors
    ///
    /// - [`CrcError::BitsizeOutOfRange`] unless `1 <= bitsize <= W::BITS`.
    /// - [`CrcError::EvenPolynomial`] if the polynomial's x^0 coefficient
    ///   (after masking to `bitsize` bits) is clear.
    pub fn new(
        bitsize: u32,
        polynomial: W,
        initial_crc: W,
        reflect_input: bool,
        reflect_output: bool,
        xor_output: W,
    ) -> Result<Self> {
        if bitsize == 0 || bitsize > W::BITS {
            return Err(CrcError::bitsize_out_of_range(bitsize, W::BITS));
        }
        let mask = W::mask(bitsize);
        let polynomial = polynomial & mask;
        if polynomial & W::ONE != W::ONE {
            return Err(CrcError::even_polynomial(polynomial.to_u64()));
        }
        Ok(Self {
            bitsize,
            polynomial,
            initial_crc: initial_crc & mask,
            xor_output: xor_output & mask,
            reflect_input,
            reflect_output,
        })
    }

    /// Register width in bits.
    pub fn bitsize(&self) -> u32 {
        self.bitsize
    }

    /// Generator polynomial, non-reflected, low bit = x^0.
    pub fn polynomial(&self) -> W {
        self.polynomial
    }

    /// The CRC value that seeds a fresh stream.
    pub fn initial_crc(&self) -> W {
        self.initial_crc
    }

    /// Value XORed onto the remainder when a stream is finished.
    pub fn xor_output(&self) -> W {
        self.xor_output
    }

    /// Whether input bytes are folded in LSB-first.
    pub fn reflect_input(&self) -> bool {
        self.reflect_input
    }

    /// Whether the final remainder is bit-reversed.
    pub fn reflect_output(&self) -> bool {
        self.reflect_output
    }

    /// Mask covering the low `bitsize` bits.
    pub fn bitmask(&self) -> W {
        W::mask(self.bitsize)
    }

    /// Maps a user-visible CRC value into the internal running state.
    ///
    /// Undoes the output XOR, reconciles the orientation when exactly one
    /// of the reflection flags is set, and aligns the register within the
    /// state word (high end for non-reflected models, low end otherwise).
    pub fn setup(&self, crc: W) -> W {
        let mut state = (crc ^ self.xor_output) & self.bitmask();
        if self.reflect_input != self.reflect_output {
            state = state.lsh(W::BITS - self.bitsize).reflect();
        }
        if !self.reflect_input {
            state = state.lsh(W::BITS - self.bitsize);
        }
        state
    }

    /// Maps the internal running state back into a user-visible CRC value.
    ///
    /// Inverse of [`setup`](Self::setup): for every model,
    /// `finish(setup(crc)) == crc & bitmask()`.
    pub fn finish(&self, state: W) -> W {
        let mut state = state;
        if !self.reflect_input {
            state = state.rsh(W::BITS - self.bitsize);
        }
        if self.reflect_input != self.reflect_output {
            state = state.lsh(W::BITS - self.bitsize).reflect();
        }
        (state ^ self.xor_output) & self.bitmask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CrcError;

    fn crc32_model() -> CrcModel<u32> {
        CrcModel::new(32, 0x04C11DB7, 0, true, true, 0xFFFFFFFF).unwrap()
    }

    #[test]
    fn algorithm_ids_round_trip() {
        for algorithm in [
            Algorithm::BitByBit,
            Algorithm::BitByBitFast,
            Algorithm::HalfbyteTable,
            Algorithm::StandardTable,
            Algorithm::SlicingBy4,
            Algorithm::SlicingBy8,
            Algorithm::SlicingBy16,
        ] {
            assert_eq!(Algorithm::from_id(algorithm.id()).unwrap(), algorithm);
        }
        assert_eq!(
            Algorithm::from_id(3),
            Err(CrcError::unknown_algorithm(3))
        );
        assert_eq!(
            Algorithm::from_id(-3),
            Err(CrcError::unknown_algorithm(-3))
        );
    }

    #[test]
    fn slicing_fits_to_the_state_word() {
        assert_eq!(
            Algorithm::SlicingBy16.fit_to_word(64),
            Algorithm::SlicingBy8
        );
        assert_eq!(Algorithm::SlicingBy8.fit_to_word(64), Algorithm::SlicingBy8);
        assert_eq!(Algorithm::SlicingBy8.fit_to_word(32), Algorithm::SlicingBy4);
        assert_eq!(
            Algorithm::SlicingBy16.fit_to_word(16),
            Algorithm::StandardTable
        );
        assert_eq!(
            Algorithm::SlicingBy4.fit_to_word(8),
            Algorithm::StandardTable
        );
        assert_eq!(Algorithm::BitByBit.fit_to_word(8), Algorithm::BitByBit);
        assert_eq!(
            Algorithm::StandardTable.fit_to_word(8),
            Algorithm::StandardTable
        );
    }

    #[test]
    fn rejects_bad_bitsize() {
        assert_eq!(
            CrcModel::<u32>::new(0, 0x07, 0, false, false, 0),
            Err(CrcError::bitsize_out_of_range(0, 32))
        );
        assert_eq!(
            CrcModel::<u32>::new(33, 0x07, 0, false, false, 0),
            Err(CrcError::bitsize_out_of_range(33, 32))
        );
        assert_eq!(
            CrcModel::<u8>::new(16, 0x07, 0, false, false, 0),
            Err(CrcError::bitsize_out_of_range(16, 8))
        );
    }

    #[test]
    fn rejects_even_polynomial() {
        assert_eq!(
            CrcModel::<u16>::new(16, 0x8004, 0, true, true, 0),
            Err(CrcError::even_polynomial(0x8004))
        );
        // The check applies after masking: bit 0 must be set within the
        // model's own width.
        assert_eq!(
            CrcModel::<u32>::new(8, 0x0100, 0, false, false, 0),
            Err(CrcError::even_polynomial(0))
        );
    }

    #[test]
    fn masks_value_parameters_to_bitsize() {
        let model = CrcModel::<u32>::new(8, 0xFFFF_FF07, 0xAAAA_AA12, false, false, 0xBBBB_BB34)
            .unwrap();
        assert_eq!(model.polynomial(), 0x07);
        assert_eq!(model.initial_crc(), 0x12);
        assert_eq!(model.xor_output(), 0x34);
    }

    #[test]
    fn setup_and_finish_are_inverses() {
        for crc in [0u32, 1, 0xDEAD_BEEF, u32::MAX] {
            let model = crc32_model();
            assert_eq!(model.finish(model.setup(crc)), crc & model.bitmask());
        }

        // Mixed reflection flags exercise the orientation reconciliation.
        let mixed = CrcModel::<u16>::new(12, 0x80F, 0x123, true, false, 0x5A5).unwrap();
        for crc in [0u16, 0x0FFF, 0x0ABC] {
            assert_eq!(mixed.finish(mixed.setup(crc)), crc & mixed.bitmask());
        }
    }

    #[test]
    fn setup_aligns_the_register() {
        // Non-reflected models keep the register in the high bits.
        let msb = CrcModel::<u32>::new(16, 0x1021, 0, false, false, 0).unwrap();
        assert_eq!(msb.setup(0xFFFF), 0xFFFF_0000);

        // Reflected models keep it in the low bits.
        let lsb = CrcModel::<u32>::new(16, 0x8005, 0, true, true, 0).unwrap();
        assert_eq!(lsb.setup(0xFFFF), 0x0000_FFFF);
    }
}
