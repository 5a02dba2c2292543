//! Models command implementation.

use oxicrc_core::catalog::PRESETS;
use serde_json::json;
use std::error::Error;

pub fn cmd_models(json_output: bool) -> Result<(), Box<dyn Error>> {
    if json_output {
        let entries: Vec<_> = PRESETS
            .iter()
            .map(|preset| {
                json!({
                    "name": preset.name,
                    "bitsize": preset.bitsize,
                    "polynomial": format!("{:#x}", preset.polynomial),
                    "initial_crc": format!("{:#x}", preset.initial_crc),
                    "reflect_input": preset.reflect_input,
                    "reflect_output": preset.reflect_output,
                    "xor_output": format!("{:#x}", preset.xor_output),
                    "check": format!("{:#x}", preset.check),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{:<18} {:>4}  {:>18}  {:>5} {:>6}  {:>18}  CHECK",
        "NAME", "BITS", "POLY", "REFIN", "REFOUT", "XOROUT"
    );
    for preset in PRESETS {
        println!(
            "{:<18} {:>4}  {:>18}  {:>5} {:>6}  {:>18}  {:#x}",
            preset.name,
            preset.bitsize,
            format!("{:#x}", preset.polynomial),
            preset.reflect_input,
            preset.reflect_output,
            format!("{:#x}", preset.xor_output),
            preset.check,
        );
    }

    Ok(())
}
