//! Rendering and writing of the Vivado build files.

mod scaffold;
pub mod templates;

pub use scaffold::{prepare_build_dir, write_generated};

use crate::core::ProjectContext;
use askama::Template as _;
use templates::{
    BatchScriptTemplate, GitignoreTemplate, MakefileTemplate, ShellScriptTemplate,
    TclScriptTemplate,
};

/// A rendered file waiting to be written into the build directory.
#[derive(Clone, Debug)]
pub struct GeneratedFile {
    /// File name inside the build directory.
    pub name: &'static str,
    pub content: String,
}

/// Renders every build file, in the order they are written.
pub fn render_files(ctx: &ProjectContext) -> Result<Vec<GeneratedFile>, askama::Error> {
    Ok(vec![
        GeneratedFile {
            name: ".gitignore",
            content: GitignoreTemplate.render()?,
        },
        GeneratedFile {
            name: "Makefile",
            content: MakefileTemplate { ctx }.render()?,
        },
        GeneratedFile {
            name: "vivado_project.sh",
            content: ShellScriptTemplate { ctx }.render()?,
        },
        GeneratedFile {
            name: "vivado_project.bat",
            content: BatchScriptTemplate { ctx }.render()?,
        },
        GeneratedFile {
            name: "vivado_project.tcl",
            content: TclScriptTemplate { ctx }.render()?,
        },
    ])
}
