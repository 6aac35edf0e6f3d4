//! Depth-first expansion of `.flt` files.

use crate::FltParseError;
use crate::path::{absolute, is_manifest, resolve_entry, to_forward_slashes};
use indexmap::IndexSet;
use std::path::{Path, PathBuf};

/// Marks the start of a comment line.
const COMMENT_MARKER: char = '#';

/// Line breaks: `\n`, `\r\n` and a lone `\r` all end a line.
const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// `.flt` files already entered during one resolution, in entry order.
///
/// A single set is shared by every nested expansion, so a file reached
/// through two sibling branches is expanded only once.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    paths: IndexSet<PathBuf>,
}

impl VisitedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding the top-level `.flt` file.
    pub fn seeded(manifest: PathBuf) -> Self {
        let mut set = Self::new();
        set.insert(manifest);
        set
    }

    /// Adds `path`, returning false if it was already present.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        self.paths.insert(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates over the entered files in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

/// Expands `.flt` files and remembers what it entered and skipped.
///
/// State is reset at the start of every [`Resolver::resolve`] call, so one
/// resolver can be reused for unrelated top-level files.
#[derive(Debug, Default)]
pub struct Resolver {
    visited: VisitedSet,
    skipped: Vec<PathBuf>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands `manifest` into its leaf files.
    ///
    /// The caller is expected to have checked that `manifest` is a `.flt`
    /// file. Any read failure aborts the whole expansion.
    pub fn resolve(&mut self, manifest: &Path) -> Result<Vec<String>, FltParseError> {
        let manifest = absolute(manifest)?;
        self.visited = VisitedSet::seeded(manifest.clone());
        self.skipped.clear();

        self.expand(&manifest)
    }

    /// `.flt` files entered by the last resolution, top-level file first.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// References to `.flt` files that were skipped because they had already
    /// been entered, in the order they were encountered.
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    fn expand(&mut self, manifest: &Path) -> Result<Vec<String>, FltParseError> {
        tracing::info!("Parse flt file: \"{}\"", manifest.display());

        let content = fs_err::read_to_string(manifest)?;
        let base_dir = manifest.parent().unwrap_or(Path::new("/"));

        let mut files = Vec::new();

        for line in content.split(LINE_BREAKS) {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with(COMMENT_MARKER) {
                continue;
            }

            let path = resolve_entry(base_dir, entry);

            if !is_manifest(&path) {
                files.push(to_forward_slashes(&path));
                continue;
            }

            if self.visited.contains(&path) {
                tracing::debug!("File \"{}\" is already parsed, so ignore.", path.display());
                self.skipped.push(path);
                continue;
            }

            self.visited.insert(path.clone());
            files.extend(self.expand(&path)?);
        }

        Ok(files)
    }
}

/// Expands a top-level `.flt` file into its leaf files.
pub fn resolve(manifest: &Path) -> Result<Vec<String>, FltParseError> {
    Resolver::new().resolve(manifest)
}

/// Expands `manifest` while sharing `visited` with the caller.
///
/// `manifest` is added to `visited` if it is not there yet. Files already in
/// `visited` are treated as expanded and are skipped when referenced.
pub fn resolve_with(
    manifest: &Path,
    visited: &mut VisitedSet,
) -> Result<Vec<String>, FltParseError> {
    let manifest = absolute(manifest)?;
    visited.insert(manifest.clone());

    let mut resolver = Resolver {
        visited: std::mem::take(visited),
        skipped: Vec::new(),
    };
    let result = resolver.expand(&manifest);
    *visited = resolver.visited;

    result
}
