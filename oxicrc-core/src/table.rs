//! Lookup-table construction for the table-driven kernels.
//!
//! Tables are derived deterministically from a model and a strategy, so
//! they can be built once and shared across any number of streams. The
//! layout is a flat, row-major array of state words: the halfbyte strategy
//! uses a single 16-entry row, the standard strategy a single 256-entry
//! row, and slicing-by-N stacks N rows of 256 where row 0 is exactly the
//! standard table and row s precomputes the remainder a byte contributes
//! from s additional byte positions away.

use crate::model::{Algorithm, CrcModel};
use crate::traits::CrcWord;

/// Size in bytes of the buffer [`build_table_into`] requires for
/// `algorithm` at state word `W`. Zero for the tableless strategies.
pub fn table_size<W: CrcWord>(algorithm: Algorithm) -> usize {
    algorithm.table_words().unwrap_or(0) * size_of::<W>()
}

/// Builds the lookup table for `model` under `algorithm`.
///
/// Tableless strategies yield an empty vector.
pub fn build_table<W: CrcWord>(model: &CrcModel<W>, algorithm: Algorithm) -> Vec<W> {
    let mut table = vec![W::ZERO; algorithm.table_words().unwrap_or(0)];
    build_table_into(model, algorithm, &mut table);
    table
}

/// Fills `table` with the lookup table for `model` under `algorithm`.
///
/// Deterministic and idempotent: rebuilding into the same buffer writes the
/// same words. Does nothing for the tableless strategies.
///
/// # Panics
///
/// Panics if `table` is shorter than `algorithm.table_words()`.
pub fn build_table_into<W: CrcWord>(model: &CrcModel<W>, algorithm: Algorithm, table: &mut [W]) {
    let (entries, rounds, rows) = match algorithm {
        Algorithm::BitByBit | Algorithm::BitByBitFast => return,
        Algorithm::HalfbyteTable => (16usize, 4u32, 1usize),
        Algorithm::StandardTable => (256, 8, 1),
        Algorithm::SlicingBy4 => (256, 8, 4),
        Algorithm::SlicingBy8 => (256, 8, 8),
        Algorithm::SlicingBy16 => (256, 8, 16),
    };
    let table = &mut table[..entries * rows];
    let align = W::BITS - model.bitsize();

    if model.reflect_input() {
        let poly = model.polynomial().lsh(align).reflect();
        for (entry, slot) in table.iter_mut().enumerate().take(entries) {
            let mut rem = W::from_u64(entry as u64);
            for _ in 0..rounds {
                rem = rem.rsh(1) ^ (poly & (rem & W::ONE).wrapping_neg());
            }
            *slot = rem;
        }
        for row in 1..rows {
            for entry in 0..entries {
                let prev = table[(row - 1) * entries + entry];
                table[row * entries + entry] = table[prev.low_byte() as usize] ^ prev.rsh(8);
            }
        }
    } else {
        let poly = model.polynomial().lsh(align);
        for (entry, slot) in table.iter_mut().enumerate().take(entries) {
            let mut rem = W::from_u64(entry as u64).lsh(W::BITS - rounds);
            for _ in 0..rounds {
                rem = rem.lsh(1) ^ (poly & rem.rsh(W::BITS - 1).wrapping_neg());
            }
            *slot = rem;
        }
        for row in 1..rows {
            for entry in 0..entries {
                let prev = table[(row - 1) * entries + entry];
                table[row * entries + entry] =
                    table[prev.rsh(W::BITS - 8).low_byte() as usize] ^ prev.lsh(8);
            }
        }
    }
}
