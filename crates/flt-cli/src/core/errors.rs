//! CLI error types using miette for Rust-style diagnostics.

// Fields in these structs are read by miette's Diagnostic derive macro
#![allow(unused)]

use flt_parser::FltParseError;
use flt_toml::FltConfigError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for invalid input, unreadable file lists and rendering failures.
pub const EXIT_INPUT: u8 = 1;

/// Exit status when something in the way of the generated files is not of the
/// expected file type.
pub const EXIT_CONFLICT: u8 = 2;

/// Error when the top-level path is missing or not a regular file.
#[derive(Debug, Diagnostic, Error)]
#[error("File \"{}\" is not a regular file", .path.display())]
#[diagnostic(
    code(flt_tool::input::not_a_file),
    help("Pass the path of an existing .flt file list")
)]
pub struct NotAFileError {
    /// The absolute path that was checked.
    pub path: PathBuf,
}

/// Error when the top-level path does not end in `.flt`.
#[derive(Debug, Diagnostic, Error)]
#[error("File \"{}\" should have extension .flt", .path.display())]
#[diagnostic(
    code(flt_tool::input::extension),
    help("Point flt-tool at the top-level .flt file list")
)]
pub struct ExtensionError {
    /// The absolute path that was checked.
    pub path: PathBuf,
}

/// Error when the build directory path is taken by something that is not a
/// directory.
#[derive(Debug, Diagnostic, Error)]
#[error("File \"{}\" already exists but is not a folder, abort.", .path.display())]
#[diagnostic(
    code(flt_tool::scaffold::build_dir),
    help("Remove it or choose another location with --build-dir")
)]
pub struct BuildDirConflictError {
    pub path: PathBuf,
}

/// Error when a generated file's path is taken by something that is not a
/// regular file.
#[derive(Debug, Diagnostic, Error)]
#[error("File \"{}\" already exists but is not a regular file, abort.", .path.display())]
#[diagnostic(
    code(flt_tool::scaffold::target),
    help("Remove it so the generated file can be written")
)]
pub struct TargetConflictError {
    pub path: PathBuf,
}

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    NotAFile(#[from] NotAFileError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Extension(#[from] ExtensionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    BuildDirConflict(#[from] BuildDirConflictError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    TargetConflict(#[from] TargetConflictError),

    #[error("failed to resolve file list: {0}")]
    #[diagnostic(
        code(flt_tool::resolve),
        help("Every .flt file referenced from another .flt file must exist and be UTF-8 text")
    )]
    Resolve(#[from] FltParseError),

    #[error("invalid configuration: {0}")]
    #[diagnostic(
        code(flt_tool::config),
        help("Known keys: project_name, vivado_version, part, project_dir, build_dir")
    )]
    Config(#[from] FltConfigError),

    #[error("failed to render template: {0}")]
    #[diagnostic(code(flt_tool::render))]
    Render(#[from] askama::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(flt_tool::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::BuildDirConflict(_) | CliError::TargetConflict(_) => EXIT_CONFLICT,
            _ => EXIT_INPUT,
        }
    }
}
