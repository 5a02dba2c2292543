//! The CRC engine: strategy dispatch, lazy table attachment, and the
//! low-level state operations.
//!
//! A [`Crc`] pairs a [`CrcModel`] with an [`Algorithm`] and caches the
//! lookup table the strategy needs. The table is built at most once, on
//! first use, and then shared by every stream derived from the engine. An
//! engine created with [`Crc::tableless`] never allocates: table-driven
//! strategy choices silently run the tableless
//! [`BitByBitFast`](Algorithm::BitByBitFast) kernel instead, producing the
//! same digests at lower speed. That keeps the engine usable where heap
//! pressure is an expected condition, and it is why updating can never
//! fail.

use std::sync::OnceLock;

use crate::kernels;
use crate::model::{Algorithm, CrcModel};
use crate::stream::CrcStream;
use crate::table;
use crate::traits::CrcWord;

/// A CRC engine: a model paired with an evaluation strategy and, for the
/// table-driven strategies, a lazily built lookup table.
///
/// # Example
///
/// ```
/// use oxicrc_core::{Algorithm, Crc64, CrcModel};
///
/// // CRC-64/XZ.
/// let model = CrcModel::new(
///     64,
///     0x42F0E1EBA9EA3693u64,
///     0,
///     true,
///     true,
///     0xFFFFFFFFFFFFFFFF,
/// )
/// .unwrap();
/// let crc = Crc64::new(model, Algorithm::SlicingBy8);
/// assert_eq!(crc.compute(b"123456789"), 0x995DC9BBDF1939FA);
/// ```
#[derive(Debug, Clone)]
pub struct Crc<W: CrcWord> {
    model: CrcModel<W>,
    algorithm: Algorithm,
    table: OnceLock<Box<[W]>>,
    build_on_demand: bool,
}

impl<W: CrcWord> Crc<W> {
    /// Creates an engine whose lookup table, if the strategy needs one, is
    /// built on first use and cached.
    ///
    /// A slicing strategy wider than the state word is narrowed to the
    /// widest slice the word supports; [`algorithm`](Self::algorithm)
    /// reports the strategy actually configured.
    pub fn new(model: CrcModel<W>, algorithm: Algorithm) -> Self {
        Self {
            model,
            algorithm: algorithm.fit_to_word(W::BITS),
            table: OnceLock::new(),
            build_on_demand: true,
        }
    }

    /// Creates an engine that never allocates.
    ///
    /// Table-driven strategy choices run as
    /// [`BitByBitFast`](Algorithm::BitByBitFast) instead — same digests,
    /// lower throughput — unless a table is attached later with
    /// [`prepare_table`](Self::prepare_table).
    pub fn tableless(model: CrcModel<W>, algorithm: Algorithm) -> Self {
        Self {
            model,
            algorithm: algorithm.fit_to_word(W::BITS),
            table: OnceLock::new(),
            build_on_demand: false,
        }
    }

    /// The model this engine evaluates.
    pub fn model(&self) -> &CrcModel<W> {
        &self.model
    }

    /// The configured strategy, after slice-width narrowing.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The strategy updates will actually run: the configured one, or
    /// [`BitByBitFast`](Algorithm::BitByBitFast) for a tableless engine
    /// whose strategy wants a table it does not have.
    pub fn effective_algorithm(&self) -> Algorithm {
        if self.algorithm.needs_table() && !self.build_on_demand && self.table.get().is_none() {
            Algorithm::BitByBitFast
        } else {
            self.algorithm
        }
    }

    /// Builds and attaches the lookup table now. Idempotent; later calls
    /// return the cached table. On a [`tableless`](Self::tableless) engine
    /// this is the one way to opt back into table-driven updates.
    ///
    /// Returns an empty slice for the tableless strategies.
    pub fn prepare_table(&self) -> &[W] {
        self.table
            .get_or_init(|| table::build_table(&self.model, self.algorithm).into_boxed_slice())
    }

    fn table(&self) -> Option<&[W]> {
        if let Some(table) = self.table.get() {
            return Some(&table[..]);
        }
        if self.build_on_demand {
            return Some(self.prepare_table());
        }
        None
    }

    /// Maps a user-visible CRC value into the internal running state.
    pub fn setup(&self, crc: W) -> W {
        self.model.setup(crc)
    }

    /// Folds `bytes` into `state` and returns the new state.
    ///
    /// Routes to the configured kernel, building the lookup table first if
    /// this engine may and has not yet. Always succeeds; an empty range
    /// returns the state unchanged.
    pub fn update(&self, state: W, bytes: &[u8]) -> W {
        match self.algorithm {
            Algorithm::BitByBit => kernels::bitbybit(&self.model, state, bytes),
            Algorithm::BitByBitFast => kernels::bitbybit_fast(&self.model, state, bytes),
            algorithm => match self.table() {
                None => kernels::bitbybit_fast(&self.model, state, bytes),
                Some(table) => match algorithm {
                    Algorithm::HalfbyteTable => {
                        kernels::halfbyte_table(&self.model, state, bytes, table)
                    }
                    Algorithm::StandardTable => {
                        kernels::standard_table(&self.model, state, bytes, table)
                    }
                    Algorithm::SlicingBy4 => kernels::slicing_by_4(&self.model, state, bytes, table),
                    Algorithm::SlicingBy8 => kernels::slicing_by_8(&self.model, state, bytes, table),
                    Algorithm::SlicingBy16 => {
                        kernels::slicing_by_16(&self.model, state, bytes, table)
                    }
                    Algorithm::BitByBit | Algorithm::BitByBitFast => unreachable!(),
                },
            },
        }
    }

    /// Maps the internal running state back into a user-visible CRC value.
    pub fn finish(&self, state: W) -> W {
        self.model.finish(state)
    }

    /// Computes the CRC of `bytes` in one call.
    pub fn compute(&self, bytes: &[u8]) -> W {
        let state = self.update(self.setup(self.model.initial_crc()), bytes);
        self.finish(state)
    }

    /// Opens a stream seeded with the model's initial CRC.
    pub fn stream(&self) -> CrcStream<'_, W> {
        CrcStream::new(self)
    }

    /// Opens a stream that continues from a previously finished CRC value
    /// and byte count.
    pub fn stream_from(&self, crc: W, total: u64) -> CrcStream<'_, W> {
        CrcStream::resumed(self, crc, total)
    }
}

/// Engine fixed to an 8-bit state word.
pub type Crc8 = Crc<u8>;
/// Engine fixed to a 16-bit state word.
pub type Crc16 = Crc<u16>;
/// Engine fixed to a 32-bit state word.
pub type Crc32 = Crc<u32>;
/// Engine fixed to a 64-bit state word.
pub type Crc64 = Crc<u64>;
