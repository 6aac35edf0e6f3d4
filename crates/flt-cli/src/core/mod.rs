//! Core types shared across the CLI.

mod errors;
mod types;

pub use errors::*;
pub use types::ProjectContext;
