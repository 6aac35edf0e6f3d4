//! CLI command implementations.

mod generate;

pub use generate::{FltArgs, LogArgs, ProjectArgs, run_generate, validate_top_level};
