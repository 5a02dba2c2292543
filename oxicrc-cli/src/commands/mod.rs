//! Command implementations for the OxiCrc CLI.

pub mod check;
pub mod models;
pub mod selftest;
pub mod sum;

pub use check::cmd_check;
pub use models::cmd_models;
pub use selftest::cmd_selftest;
pub use sum::cmd_sum;
