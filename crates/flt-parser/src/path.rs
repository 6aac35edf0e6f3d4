//! Lexical path handling for `.flt` entries.
//!
//! Nothing here touches the filesystem beyond reading the working directory:
//! symlinks are kept as written so that two references to the same `.flt`
//! file compare equal exactly when their spelled-out absolute paths do.

use crate::FltParseError;
use path_slash::PathExt as _;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Extension (without the dot) that marks a file list.
pub const MANIFEST_EXTENSION: &str = "flt";

/// Returns true if `path` names a `.flt` file list.
///
/// The comparison is case-sensitive, and a bare `.flt` file name has no
/// extension at all.
pub fn is_manifest(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == MANIFEST_EXTENSION)
}

/// Collapses `.` and `..` components without consulting the filesystem.
///
/// `..` never climbs above the root of an absolute path. Leading `..` of a
/// relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                },
                Some(Component::RootDir | Component::Prefix(_)) => {},
                Some(Component::ParentDir | Component::CurDir) | None => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }

    out.iter().collect()
}

/// Makes `path` absolute against the working directory and normalizes it.
pub fn absolute(path: &Path) -> Result<PathBuf, FltParseError> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }

    let cwd = env::current_dir().map_err(FltParseError::CurrentDir)?;
    Ok(normalize(&cwd.join(path)))
}

/// Resolves an entry of a `.flt` file against the directory holding it.
///
/// Backslashes in `entry` are read as separators. An absolute entry replaces
/// `base_dir` entirely.
pub fn resolve_entry(base_dir: &Path, entry: &str) -> PathBuf {
    normalize(&base_dir.join(entry.replace('\\', "/")))
}

/// Renders `path` with `/` as the only separator.
///
/// Vivado's Tcl shell mangles backslashes, so every backslash is replaced,
/// including ones that are plain file name characters on Unix.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_slash_lossy().replace('\\', "/")
}
