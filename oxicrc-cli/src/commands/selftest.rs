//! Selftest command implementation.

use oxicrc_core::Algorithm;
use oxicrc_core::catalog::PRESETS;
use std::error::Error;

const CHECK_INPUT: &[u8] = b"123456789";

pub fn cmd_selftest(verbose: bool) -> Result<(), Box<dyn Error>> {
    let mut failures = 0usize;

    for preset in PRESETS {
        let crc = preset.engine(Algorithm::StandardTable)?;
        let computed = crc.compute(CHECK_INPUT);

        if computed == preset.check {
            if verbose {
                println!("  PASS: {}", preset.name);
            }
        } else {
            failures += 1;
            println!(
                "  FAIL: {} (expected {:#x}, computed {:#x})",
                preset.name, preset.check, computed
            );
        }
    }

    if failures == 0 {
        println!("All {} models OK", PRESETS.len());
        Ok(())
    } else {
        Err(format!("{failures} model(s) failed the check-value test").into())
    }
}
