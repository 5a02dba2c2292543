//! # OxiCrc Core
//!
//! A parameterisable CRC engine: describe any CRC variant of up to 64 bits
//! by its model parameters — register width, generator polynomial, initial
//! CRC, reflection flags, output XOR — pick an evaluation strategy, and
//! stream bytes through it.
//!
//! This crate provides the fundamental building blocks:
//!
//! - [`model`]: the immutable CRC variant description and the seven
//!   evaluation strategies
//! - [`table`]: lookup-table construction (16-entry, 256-entry, and
//!   slicing-by-4/8/16)
//! - [`engine`]: strategy dispatch with lazy table attachment
//! - [`stream`]: incremental digests with reset/resume and byte counting
//! - [`any`]: runtime-width engines behind a `u64`-facing API
//! - [`catalog`]: named parameter sets with their catalogue check values
//! - [`traits`]: the state-word abstraction the engine is generic over
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ AnyCrc / catalog       runtime width, named parameters   │
//! ├──────────────────────────────────────────────────────────┤
//! │ Crc<W> / CrcStream     dispatch, lazy table, streaming   │
//! ├──────────────────────────────────────────────────────────┤
//! │ kernels / table        byte-folding loops, table builder │
//! ├──────────────────────────────────────────────────────────┤
//! │ CrcModel<W> / CrcWord  parameters, setup/finish, words   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every strategy computes the same function. The tableless strategies
//! trade speed for zero allocation; the slicing strategies trade table
//! memory for throughput. All of them read input strictly byte by byte, so
//! results are identical on any host byte order and input alignment.
//!
//! ## Example
//!
//! ```rust
//! use oxicrc_core::{Algorithm, Crc32, CrcModel};
//!
//! // CRC-32/ISO-HDLC, as used by ZIP, GZIP and PNG.
//! let model = CrcModel::new(32, 0x04C11DB7u32, 0, true, true, 0xFFFFFFFF).unwrap();
//! let crc = Crc32::new(model, Algorithm::SlicingBy4);
//!
//! assert_eq!(crc.compute(b"123456789"), 0xCBF43926);
//!
//! let mut stream = crc.stream();
//! stream.update(b"1234");
//! stream.update(b"56789");
//! assert_eq!(stream.hexdigest(), "cbf43926");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod any;
pub mod catalog;
pub mod engine;
pub mod error;
mod kernels;
pub mod model;
pub mod stream;
pub mod table;
pub mod traits;

// Re-exports for convenience
pub use any::{AnyCrc, AnyCrcStream};
pub use catalog::CrcPreset;
pub use engine::{Crc, Crc8, Crc16, Crc32, Crc64};
pub use error::{CrcError, Result};
pub use model::{Algorithm, CrcModel};
pub use stream::CrcStream;
pub use table::{build_table, build_table_into, table_size};
pub use traits::CrcWord;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::any::{AnyCrc, AnyCrcStream};
    pub use crate::catalog::CrcPreset;
    pub use crate::engine::{Crc, Crc8, Crc16, Crc32, Crc64};
    pub use crate::error::{CrcError, Result};
    pub use crate::model::{Algorithm, CrcModel};
    pub use crate::stream::CrcStream;
    pub use crate::traits::CrcWord;
}
