//! Catalogue reference vectors and cross-kernel consistency checks.
//!
//! The six models below are the widely published reference set; every
//! evaluation strategy must reproduce the catalogue CRC of the standard
//! check string, and streams must behave identically however the input is
//! split.

use oxicrc_core::catalog;
use oxicrc_core::{Algorithm, AnyCrc, Crc, CrcModel};

const CHECK_INPUT: &[u8] = b"123456789";

const ALL_ALGORITHMS: [Algorithm; 7] = [
    Algorithm::BitByBit,
    Algorithm::BitByBitFast,
    Algorithm::HalfbyteTable,
    Algorithm::StandardTable,
    Algorithm::SlicingBy4,
    Algorithm::SlicingBy8,
    Algorithm::SlicingBy16,
];

/// (name, bitsize, polynomial, empty-message CRC, refin, refout, xorout, check)
const REFERENCE_MODELS: [(&str, u32, u64, u64, bool, bool, u64, u64); 6] = [
    ("crc8-smbus", 8, 0x07, 0x00, false, false, 0x00, 0xF4),
    ("crc16-arc", 16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D),
    ("crc16-ccitt-false", 16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1),
    (
        "crc32",
        32,
        0x04C11DB7,
        0x00000000,
        true,
        true,
        0xFFFFFFFF,
        0xCBF43926,
    ),
    (
        "crc32c",
        32,
        0x1EDC6F41,
        0x00000000,
        true,
        true,
        0xFFFFFFFF,
        0xE3069283,
    ),
    (
        "crc64-xz",
        64,
        0x42F0E1EBA9EA3693,
        0x0000000000000000,
        true,
        true,
        0xFFFFFFFFFFFFFFFF,
        0x995DC9BBDF1939FA,
    ),
];

fn engine(
    params: (&str, u32, u64, u64, bool, bool, u64, u64),
    algorithm: Algorithm,
) -> AnyCrc {
    let (name, bitsize, poly, init, refin, refout, xorout, _) = params;
    AnyCrc::new(bitsize, poly, init, refin, refout, xorout, algorithm)
        .unwrap_or_else(|e| panic!("model {name}: {e}"))
}

#[test]
fn reference_vectors_hold_for_every_algorithm() {
    for params in REFERENCE_MODELS {
        let (name, _, _, _, _, _, _, check) = params;
        for algorithm in ALL_ALGORITHMS {
            let crc = engine(params, algorithm);
            assert_eq!(
                crc.compute(CHECK_INPUT),
                check,
                "model {name}, algorithm {algorithm:?}"
            );
        }
    }
}

#[test]
fn empty_input_yields_the_initial_crc() {
    for params in REFERENCE_MODELS {
        let (name, _, _, init, _, _, _, _) = params;
        for algorithm in ALL_ALGORITHMS {
            let crc = engine(params, algorithm);
            assert_eq!(crc.compute(b""), init, "model {name}, algorithm {algorithm:?}");
        }
    }
}

#[test]
fn incremental_splits_match_one_shot() {
    // 1+8, 2+7 and 9+0 splits of the check string.
    for params in REFERENCE_MODELS {
        let (name, _, _, _, _, _, _, check) = params;
        let crc = engine(params, Algorithm::StandardTable);
        for split in [1usize, 2, 9] {
            let (head, tail) = CHECK_INPUT.split_at(split);
            let mut stream = crc.stream();
            stream.update(head);
            stream.update(tail);
            assert_eq!(stream.finish(), check, "model {name}, split {split}");
            assert_eq!(stream.total(), 9);
        }
    }
}

#[test]
fn streaming_is_split_invariant() {
    // Arbitrary chunkings of a larger message agree with the one-shot
    // digest for every algorithm.
    let message: Vec<u8> = (0u32..2048).map(|i| (i * 31 + 7) as u8).collect();
    for params in REFERENCE_MODELS {
        let (name, ..) = params;
        let reference = engine(params, Algorithm::BitByBit).compute(&message);
        for algorithm in ALL_ALGORITHMS {
            let crc = engine(params, algorithm);
            for chunk_size in [1usize, 3, 16, 17, 64, 333] {
                let mut stream = crc.stream();
                for chunk in message.chunks(chunk_size) {
                    stream.update(chunk);
                }
                assert_eq!(
                    stream.finish(),
                    reference,
                    "model {name}, algorithm {algorithm:?}, chunk {chunk_size}"
                );
            }
        }
    }
}

#[test]
fn reset_and_reuse() {
    let crc = catalog::find("crc32")
        .unwrap()
        .engine(Algorithm::SlicingBy4)
        .unwrap();
    let mut stream = crc.stream();
    stream.update(b"abc");
    stream.reset();
    stream.update(CHECK_INPUT);
    assert_eq!(stream.finish(), 0xCBF43926);
}

#[test]
fn tableless_engines_fall_back_and_stay_correct() {
    // The no-allocation configuration must produce catalogue values even
    // when the requested strategy is table-hungry.
    for params in REFERENCE_MODELS {
        let (name, bitsize, poly, init, refin, refout, xorout, check) = params;
        let crc = AnyCrc::tableless(
            bitsize,
            poly,
            init,
            refin,
            refout,
            xorout,
            Algorithm::SlicingBy16,
        )
        .unwrap();
        assert_eq!(crc.effective_algorithm(), Algorithm::BitByBitFast, "model {name}");
        assert_eq!(crc.compute(CHECK_INPUT), check, "model {name}");
        // Once downgraded, it stays downgraded.
        assert_eq!(crc.effective_algorithm(), Algorithm::BitByBitFast, "model {name}");
    }
}

#[test]
fn wide_input_is_self_consistent() {
    // One million 0xFF bytes: the sliced result must match the
    // bit-at-a-time kernel.
    let input = vec![0xFFu8; 1_000_000];
    let model = CrcModel::<u32>::new(32, 0x04C11DB7, 0, true, true, 0xFFFFFFFF).unwrap();
    let reference = Crc::new(model, Algorithm::BitByBit).compute(&input);
    for algorithm in [
        Algorithm::BitByBitFast,
        Algorithm::HalfbyteTable,
        Algorithm::StandardTable,
        Algorithm::SlicingBy4,
        Algorithm::SlicingBy8,
        Algorithm::SlicingBy16,
    ] {
        let crc = Crc::new(model, algorithm);
        assert_eq!(crc.compute(&input), reference, "algorithm {algorithm:?}");
    }
}

#[test]
fn wider_state_words_change_nothing() {
    // The same model evaluated over a wider word than it needs must
    // produce the same digests; only the available slice widths differ.
    let narrow = CrcModel::<u8>::new(8, 0x07, 0, false, false, 0).unwrap();
    let wide = CrcModel::<u64>::new(8, 0x07, 0, false, false, 0).unwrap();
    for algorithm in ALL_ALGORITHMS {
        let narrow_crc = Crc::new(narrow, algorithm).compute(CHECK_INPUT);
        let wide_crc = Crc::new(wide, algorithm).compute(CHECK_INPUT);
        assert_eq!(narrow_crc as u64, wide_crc, "algorithm {algorithm:?}");
        assert_eq!(narrow_crc, 0xF4, "algorithm {algorithm:?}");
    }

    let narrow = CrcModel::<u16>::new(16, 0x8005, 0, true, true, 0).unwrap();
    let wide = CrcModel::<u32>::new(16, 0x8005, 0, true, true, 0).unwrap();
    for algorithm in ALL_ALGORITHMS {
        assert_eq!(
            Crc::new(narrow, algorithm).compute(CHECK_INPUT) as u32,
            Crc::new(wide, algorithm).compute(CHECK_INPUT),
            "algorithm {algorithm:?}"
        );
    }
}

#[test]
fn high_bits_of_user_values_are_ignored() {
    // Passing a resumed CRC with garbage above the register width must not
    // change the digest.
    let crc = catalog::find("crc16-arc")
        .unwrap()
        .engine(Algorithm::StandardTable)
        .unwrap();
    let mut clean = crc.stream_from(0x0000_0000_0000_1D0F, 0);
    let mut dirty = crc.stream_from(0xABCD_EF01_0000_1D0F, 0);
    clean.update(CHECK_INPUT);
    dirty.update(CHECK_INPUT);
    assert_eq!(clean.finish(), dirty.finish());
}

#[test]
fn mixed_reflection_models_are_internally_consistent() {
    // No catalogue value to pin these to; every kernel must still agree
    // with bit-at-a-time division, and setup/finish must stay inverses.
    let model = CrcModel::<u32>::new(32, 0x04C11DB7, 0x1234, true, false, 0xA5A5).unwrap();
    let reference = Crc::new(model, Algorithm::BitByBit).compute(CHECK_INPUT);
    for algorithm in ALL_ALGORITHMS {
        assert_eq!(
            Crc::new(model, algorithm).compute(CHECK_INPUT),
            reference,
            "algorithm {algorithm:?}"
        );
    }
    assert_eq!(model.finish(model.setup(0x1234)), 0x1234);
}

#[test]
fn digests_are_stable_across_algorithm_requests() {
    // Catalogue presets under every strategy request, hexdigest form.
    for preset in catalog::PRESETS {
        let mut digests = Vec::new();
        for algorithm in ALL_ALGORITHMS {
            let crc = preset.engine(algorithm).unwrap();
            let mut stream = crc.stream();
            stream.update(CHECK_INPUT);
            digests.push(stream.hexdigest());
        }
        digests.dedup();
        assert_eq!(digests.len(), 1, "preset {}", preset.name);
    }
}
