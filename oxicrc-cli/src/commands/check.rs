//! Check command implementation.

use crate::utils::hexdigest_of;
use oxicrc_core::AnyCrc;
use std::error::Error;

pub fn cmd_check(file: &str, expected: &str, crc: &AnyCrc) -> Result<(), Box<dyn Error>> {
    let computed = hexdigest_of(crc, file)?;

    // Normalize the expected value to the digest's width so short forms
    // like "f4" or "0xF4" compare cleanly.
    let trimmed = expected
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .to_ascii_lowercase();
    let wanted = format!("{trimmed:0>width$}", width = computed.len());

    if computed == wanted {
        println!("OK: {file} ({computed})");
        Ok(())
    } else {
        println!("MISMATCH: {file} (expected {wanted}, computed {computed})");
        Err(format!("{file}: CRC mismatch").into())
    }
}
