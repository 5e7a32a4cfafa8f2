//! Input parsing and report rendering for the `gq-cli` binary.

pub mod error;
pub mod input;
pub mod report;

pub use error::{CliError, CliResult};
pub use input::GasInput;
