//! Named CRC parameter sets from the public catalogue.
//!
//! Presets are plain data: each one feeds the same [`CrcModel`] validation
//! and kernels as user-supplied parameters. Every entry records the
//! catalogue check value (the CRC of the ASCII bytes `"123456789"`) so the
//! whole table is self-verifying.
//!
//! One convention note: `initial_crc` here is the CRC of the empty message,
//! the value that seeds a fresh stream. Catalogue listings that quote a raw
//! register init instead differ from this by exactly `xor_output` — for
//! example CRC-32's register init `0xFFFFFFFF` with output XOR `0xFFFFFFFF`
//! appears below as `initial_crc: 0`.
//!
//! [`CrcModel`]: crate::model::CrcModel

use crate::any::AnyCrc;
use crate::error::Result;
use crate::model::Algorithm;

/// A named CRC variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcPreset {
    /// Catalogue name, lowercase.
    pub name: &'static str,
    /// Register width in bits.
    pub bitsize: u32,
    /// Generator polynomial, non-reflected.
    pub polynomial: u64,
    /// CRC of the empty message; seeds a fresh stream.
    pub initial_crc: u64,
    /// Whether input bytes are folded in LSB-first.
    pub reflect_input: bool,
    /// Whether the final remainder is bit-reversed.
    pub reflect_output: bool,
    /// Value XORed onto the remainder when a stream is finished.
    pub xor_output: u64,
    /// CRC of the ASCII bytes `"123456789"`.
    pub check: u64,
}

/// Every preset this crate ships.
pub const PRESETS: &[CrcPreset] = &[
    CrcPreset {
        name: "crc8-smbus",
        bitsize: 8,
        polynomial: 0x07,
        initial_crc: 0x00,
        reflect_input: false,
        reflect_output: false,
        xor_output: 0x00,
        check: 0xF4,
    },
    CrcPreset {
        name: "crc8-maxim",
        bitsize: 8,
        polynomial: 0x31,
        initial_crc: 0x00,
        reflect_input: true,
        reflect_output: true,
        xor_output: 0x00,
        check: 0xA1,
    },
    CrcPreset {
        name: "crc16-arc",
        bitsize: 16,
        polynomial: 0x8005,
        initial_crc: 0x0000,
        reflect_input: true,
        reflect_output: true,
        xor_output: 0x0000,
        check: 0xBB3D,
    },
    CrcPreset {
        name: "crc16-ccitt-false",
        bitsize: 16,
        polynomial: 0x1021,
        initial_crc: 0xFFFF,
        reflect_input: false,
        reflect_output: false,
        xor_output: 0x0000,
        check: 0x29B1,
    },
    CrcPreset {
        name: "crc16-xmodem",
        bitsize: 16,
        polynomial: 0x1021,
        initial_crc: 0x0000,
        reflect_input: false,
        reflect_output: false,
        xor_output: 0x0000,
        check: 0x31C3,
    },
    CrcPreset {
        name: "crc16-kermit",
        bitsize: 16,
        polynomial: 0x1021,
        initial_crc: 0x0000,
        reflect_input: true,
        reflect_output: true,
        xor_output: 0x0000,
        check: 0x2189,
    },
    // ISO-HDLC, the CRC-32 of ZIP, GZIP and PNG.
    CrcPreset {
        name: "crc32",
        bitsize: 32,
        polynomial: 0x04C11DB7,
        initial_crc: 0x00000000,
        reflect_input: true,
        reflect_output: true,
        xor_output: 0xFFFFFFFF,
        check: 0xCBF43926,
    },
    CrcPreset {
        name: "crc32-bzip2",
        bitsize: 32,
        polynomial: 0x04C11DB7,
        initial_crc: 0x00000000,
        reflect_input: false,
        reflect_output: false,
        xor_output: 0xFFFFFFFF,
        check: 0xFC891918,
    },
    CrcPreset {
        name: "crc32-mpeg2",
        bitsize: 32,
        polynomial: 0x04C11DB7,
        initial_crc: 0xFFFFFFFF,
        reflect_input: false,
        reflect_output: false,
        xor_output: 0x00000000,
        check: 0x0376E6E7,
    },
    // Castagnoli.
    CrcPreset {
        name: "crc32c",
        bitsize: 32,
        polynomial: 0x1EDC6F41,
        initial_crc: 0x00000000,
        reflect_input: true,
        reflect_output: true,
        xor_output: 0xFFFFFFFF,
        check: 0xE3069283,
    },
    CrcPreset {
        name: "crc64-ecma182",
        bitsize: 64,
        polynomial: 0x42F0E1EBA9EA3693,
        initial_crc: 0x0000000000000000,
        reflect_input: false,
        reflect_output: false,
        xor_output: 0x0000000000000000,
        check: 0x6C40DF5F0B497347,
    },
    CrcPreset {
        name: "crc64-xz",
        bitsize: 64,
        polynomial: 0x42F0E1EBA9EA3693,
        initial_crc: 0x0000000000000000,
        reflect_input: true,
        reflect_output: true,
        xor_output: 0xFFFFFFFFFFFFFFFF,
        check: 0x995DC9BBDF1939FA,
    },
];

impl CrcPreset {
    /// Builds an engine for this preset.
    pub fn engine(&self, algorithm: Algorithm) -> Result<AnyCrc> {
        AnyCrc::new(
            self.bitsize,
            self.polynomial,
            self.initial_crc,
            self.reflect_input,
            self.reflect_output,
            self.xor_output,
            algorithm,
        )
    }

    /// Builds a never-allocating engine for this preset; see
    /// [`AnyCrc::tableless`].
    pub fn tableless_engine(&self, algorithm: Algorithm) -> Result<AnyCrc> {
        AnyCrc::tableless(
            self.bitsize,
            self.polynomial,
            self.initial_crc,
            self.reflect_input,
            self.reflect_output,
            self.xor_output,
            algorithm,
        )
    }
}

/// Looks up a preset by name, ignoring case and `-`, `_`, `/` and spaces,
/// so `"CRC-32"`, `"crc_32"` and `"crc32"` all resolve the same entry.
pub fn find(name: &str) -> Option<&'static CrcPreset> {
    let wanted = normalize(name);
    PRESETS.iter().find(|preset| normalize(preset.name) == wanted)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | '/' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECK_INPUT: &[u8] = b"123456789";

    #[test]
    fn every_preset_reproduces_its_check_value() {
        for preset in PRESETS {
            let crc = preset.engine(Algorithm::StandardTable).unwrap();
            assert_eq!(
                crc.compute(CHECK_INPUT),
                preset.check,
                "preset {}",
                preset.name
            );
        }
    }

    #[test]
    fn every_preset_crc_of_empty_is_its_initial() {
        for preset in PRESETS {
            let crc = preset.engine(Algorithm::BitByBit).unwrap();
            assert_eq!(crc.compute(b""), preset.initial_crc, "preset {}", preset.name);
        }
    }

    #[test]
    fn find_ignores_case_and_separators() {
        assert_eq!(find("crc32").unwrap().name, "crc32");
        assert_eq!(find("CRC-32").unwrap().name, "crc32");
        assert_eq!(find("CRC_16/ARC").unwrap().name, "crc16-arc");
        assert_eq!(find("crc64 xz").unwrap().name, "crc64-xz");
        assert!(find("crc128").is_none());
    }

    #[test]
    fn preset_names_are_unique_after_normalization() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(normalize(a.name), normalize(b.name));
            }
        }
    }
}
