//! Sum command implementation.

use crate::utils::hexdigest_of;
use oxicrc_core::AnyCrc;
use std::error::Error;

pub fn cmd_sum(files: &[String], crc: &AnyCrc) -> Result<(), Box<dyn Error>> {
    let stdin = [String::from("-")];
    let targets: &[String] = if files.is_empty() { &stdin } else { files };

    for source in targets {
        let digest = hexdigest_of(crc, source)?;
        println!("{digest}  {source}");
    }

    Ok(())
}
