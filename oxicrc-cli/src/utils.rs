//! Utility functions for the CLI.

use clap::Args;
use oxicrc_core::{Algorithm, AnyCrc, catalog};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};

/// CRC model selection shared by the digest commands: either a named
/// preset or a fully custom parameter set around `--poly`.
#[derive(Debug, Args)]
pub struct ModelArgs {
    /// Built-in model name (see `oxicrc models`)
    #[arg(short, long, default_value = "crc32", conflicts_with = "poly")]
    pub model: String,

    /// Custom generator polynomial, hexadecimal, non-reflected
    #[arg(long, value_parser = parse_hex, requires = "bitsize")]
    pub poly: Option<u64>,

    /// Register width in bits for a custom polynomial
    #[arg(long, requires = "poly")]
    pub bitsize: Option<u32>,

    /// Initial CRC for a custom model, hexadecimal
    #[arg(long, value_parser = parse_hex, default_value = "0", requires = "poly")]
    pub init: u64,

    /// Output XOR for a custom model, hexadecimal (all ones if omitted)
    #[arg(long, value_parser = parse_hex, requires = "poly")]
    pub xor_out: Option<u64>,

    /// Fold input bytes LSB-first for a custom model
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, requires = "poly")]
    pub reflect_in: bool,

    /// Bit-reverse the final remainder for a custom model
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, requires = "poly")]
    pub reflect_out: bool,
}

/// Builds the engine the digest commands will run.
pub fn resolve_engine(
    args: &ModelArgs,
    algorithm: Algorithm,
    tableless: bool,
) -> Result<AnyCrc, Box<dyn Error>> {
    let crc = if let Some(poly) = args.poly {
        let bitsize = args.bitsize.ok_or("--bitsize is required with --poly")?;
        let xor_out = args.xor_out.unwrap_or_else(|| width_mask(bitsize));
        if tableless {
            AnyCrc::tableless(
                bitsize,
                poly,
                args.init,
                args.reflect_in,
                args.reflect_out,
                xor_out,
                algorithm,
            )?
        } else {
            AnyCrc::new(
                bitsize,
                poly,
                args.init,
                args.reflect_in,
                args.reflect_out,
                xor_out,
                algorithm,
            )?
        }
    } else {
        let preset = catalog::find(&args.model)
            .ok_or_else(|| format!("unknown model '{}' (try `oxicrc models`)", args.model))?;
        if tableless {
            preset.tableless_engine(algorithm)?
        } else {
            preset.engine(algorithm)?
        }
    };
    Ok(crc)
}

/// Streams a file ("-" for stdin) through a fresh digest stream and
/// returns the hexadecimal digest.
pub fn hexdigest_of(crc: &AnyCrc, source: &str) -> Result<String, Box<dyn Error>> {
    let mut stream = crc.stream();
    if source == "-" {
        io::copy(&mut io::stdin().lock(), &mut stream)?;
    } else {
        let file = File::open(source).map_err(|e| format!("{source}: {e}"))?;
        io::copy(&mut BufReader::new(file), &mut stream)?;
    }
    Ok(stream.hexdigest())
}

/// Parses a hexadecimal integer, with or without a `0x` prefix.
pub fn parse_hex(value: &str) -> Result<u64, String> {
    let trimmed = value
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    u64::from_str_radix(trimmed, 16).map_err(|e| format!("invalid hex value '{value}': {e}"))
}

/// Mask of the low `bitsize` bits of a `u64`.
fn width_mask(bitsize: u32) -> u64 {
    match bitsize {
        0 => 0,
        1..=63 => (1u64 << bitsize) - 1,
        _ => u64::MAX,
    }
}
