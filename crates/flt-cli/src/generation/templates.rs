use crate::core::ProjectContext;
use askama::Template;

/// Template for the generated .gitignore
#[derive(Template)]
#[template(path = ".gitignore.jinja", escape = "none")]
pub struct GitignoreTemplate;

/// Template for the generated Makefile
#[derive(Template)]
#[template(path = "Makefile.jinja", escape = "none")]
pub struct MakefileTemplate<'a> {
    pub ctx: &'a ProjectContext,
}

/// Template for the POSIX shell launcher
#[derive(Template)]
#[template(path = "vivado_project.sh.jinja", escape = "none")]
pub struct ShellScriptTemplate<'a> {
    pub ctx: &'a ProjectContext,
}

/// Template for the Windows batch launcher
#[derive(Template)]
#[template(path = "vivado_project.bat.jinja", escape = "none")]
pub struct BatchScriptTemplate<'a> {
    pub ctx: &'a ProjectContext,
}

/// Template for the Tcl script that recreates the project
#[derive(Template)]
#[template(path = "vivado_project.tcl.jinja", escape = "none")]
pub struct TclScriptTemplate<'a> {
    pub ctx: &'a ProjectContext,
}
