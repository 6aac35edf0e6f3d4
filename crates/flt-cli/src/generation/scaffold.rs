//! Build directory creation and file writing.

use super::GeneratedFile;
use crate::core::{BuildDirConflictError, CliError, TargetConflictError};
use fs_err as fs;
use std::path::Path;

/// Makes sure `build_dir` exists as a directory.
///
/// An existing directory is reused. Anything else occupying the path is a
/// conflict.
pub fn prepare_build_dir(build_dir: &Path) -> Result<(), CliError> {
    if build_dir.is_dir() {
        tracing::info!("Folder \"{}\" already exists.", build_dir.display());
        return Ok(());
    }

    if build_dir.exists() {
        return Err(BuildDirConflictError {
            path: build_dir.to_path_buf(),
        }
        .into());
    }

    tracing::info!("Create folder \"{}\".", build_dir.display());
    fs::create_dir_all(build_dir)?;
    Ok(())
}

/// Writes `files` into `build_dir`.
///
/// Every target is checked before anything is written, so a conflict leaves
/// the directory untouched. Existing regular files are overwritten with a
/// warning.
pub fn write_generated(build_dir: &Path, files: &[GeneratedFile]) -> Result<(), CliError> {
    for file in files {
        let target = build_dir.join(file.name);
        if target.exists() && !target.is_file() {
            return Err(TargetConflictError { path: target }.into());
        }
    }

    for file in files {
        let target = build_dir.join(file.name);
        if target.is_file() {
            tracing::warn!(
                "File \"{}\" already exists, it will be overwritten.",
                target.display()
            );
        }

        fs::write(&target, normalize_newlines(&file.content))?;
        tracing::debug!("Wrote \"{}\".", target.display());
    }

    Ok(())
}

/// Converts line endings to `\n` and guarantees a final newline.
fn normalize_newlines(content: &str) -> String {
    let mut out = content.replace("\r\n", "\n");
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
