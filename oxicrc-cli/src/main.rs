//! OxiCrc CLI - The Oxidized Checksummer
//!
//! A Pure Rust checksum utility over a parameterisable CRC engine:
//! built-in catalogue models or fully custom polynomials, seven selectable
//! evaluation strategies.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use commands::{cmd_check, cmd_models, cmd_selftest, cmd_sum};
use oxicrc_core::Algorithm;
use std::io;
use utils::ModelArgs;

#[derive(Parser)]
#[command(name = "oxicrc")]
#[command(
    author,
    version,
    about = "The Oxidized Checksummer - parameterisable CRC utility"
)]
#[command(long_about = "
OxiCrc computes CRC digests of any catalogued or custom variant up to 64
bits, using your choice of evaluation strategy (bit-by-bit up to
slicing-by-16).

Examples:
  oxicrc sum file.bin
  oxicrc sum --model crc64-xz file.bin
  oxicrc sum --model crc32c --algorithm slicing-by-8 file.bin
  oxicrc sum --poly 0x1021 --bitsize 16 --reflect-in false --reflect-out false --xor-out 0 file.bin
  cat file.bin | oxicrc sum
  oxicrc check file.bin cbf43926
  oxicrc models --json
  oxicrc selftest
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute CRC digests of files or stdin
    #[command(alias = "s")]
    Sum {
        /// Files to digest (use "-" for stdin; stdin if empty)
        files: Vec<String>,

        #[command(flatten)]
        model: ModelArgs,

        /// Evaluation strategy
        #[arg(short, long, value_enum, default_value = "standard-table")]
        algorithm: AlgorithmArg,

        /// Never allocate lookup tables (slower, same digests)
        #[arg(long)]
        tableless: bool,
    },

    /// Verify a file against an expected digest
    #[command(alias = "c")]
    Check {
        /// File to verify (use "-" for stdin)
        file: String,

        /// Expected digest, hexadecimal
        expected: String,

        #[command(flatten)]
        model: ModelArgs,

        /// Evaluation strategy
        #[arg(short, long, value_enum, default_value = "standard-table")]
        algorithm: AlgorithmArg,
    },

    /// List the built-in CRC models
    Models {
        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Recompute the catalogue check value of every built-in model
    Selftest {
        /// Show each model as it passes
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate shell completion scripts
    #[command(hide = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Evaluation strategy (for clap ValueEnum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    /// Bit-at-a-time long division, no table
    Bitbybit,
    /// Byte-at-a-time division, no table
    BitbybitFast,
    /// 16-entry nibble table
    HalfbyteTable,
    /// 256-entry byte table
    StandardTable,
    /// Four bytes per step
    SlicingBy4,
    /// Eight bytes per step
    SlicingBy8,
    /// Sixteen bytes per step
    SlicingBy16,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bitbybit => Algorithm::BitByBit,
            AlgorithmArg::BitbybitFast => Algorithm::BitByBitFast,
            AlgorithmArg::HalfbyteTable => Algorithm::HalfbyteTable,
            AlgorithmArg::StandardTable => Algorithm::StandardTable,
            AlgorithmArg::SlicingBy4 => Algorithm::SlicingBy4,
            AlgorithmArg::SlicingBy8 => Algorithm::SlicingBy8,
            AlgorithmArg::SlicingBy16 => Algorithm::SlicingBy16,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sum {
            files,
            model,
            algorithm,
            tableless,
        } => utils::resolve_engine(&model, algorithm.into(), tableless)
            .and_then(|crc| cmd_sum(&files, &crc)),
        Commands::Check {
            file,
            expected,
            model,
            algorithm,
        } => utils::resolve_engine(&model, algorithm.into(), false)
            .and_then(|crc| cmd_check(&file, &expected, &crc)),
        Commands::Models { json } => cmd_models(json),
        Commands::Selftest { verbose } => cmd_selftest(verbose),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "oxicrc", &mut io::stdout());
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
