#![doc = include_str!("../README.md")]

mod error;
pub mod path;
mod resolver;

pub use error::FltParseError;
pub use path::{MANIFEST_EXTENSION, absolute, is_manifest, normalize, to_forward_slashes};
pub use resolver::{Resolver, VisitedSet, resolve, resolve_with};
