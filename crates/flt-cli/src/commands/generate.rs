//! The `flt-tool` command: resolve a `.flt` file and generate the build files.

use crate::core::{CliError, ExtensionError, NotAFileError, ProjectContext};
use crate::generation::{prepare_build_dir, render_files, write_generated};
use crate::utils::ui;
use clap::{Args, Parser};
use flt_parser::{Resolver, is_manifest};
use flt_toml::FltConfig;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Arguments of `flt-tool`.
#[derive(Debug, Parser)]
#[command(name = "flt-tool")]
#[command(about = "Generate Vivado project scripts from a recursive .flt file list")]
#[command(version)]
pub struct FltArgs {
    /// Read input from the specified .flt file
    pub flt: PathBuf,

    /// Only print file list then exit
    #[arg(short, long)]
    pub print_only: bool,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Log verbosity flags. At most one may be given.
#[derive(Debug, Clone, Default, Args)]
#[group(multiple = false)]
pub struct LogArgs {
    /// Only show error messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Show almost all log, except debug messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Show all log, including debug messages
    #[arg(short, long)]
    pub debug: bool,
}

impl LogArgs {
    /// The level selected on the command line, if any.
    pub fn level(&self) -> Option<Level> {
        if self.debug {
            Some(Level::DEBUG)
        } else if self.verbose {
            Some(Level::INFO)
        } else if self.quiet {
            Some(Level::ERROR)
        } else {
            None
        }
    }
}

/// Overrides for the values normally read from `flt.toml`.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    /// Read settings from this file instead of flt.toml next to the .flt file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project name (defaults to the .flt file name)
    #[arg(long)]
    pub name: Option<String>,

    /// FPGA part number
    #[arg(long)]
    pub part: Option<String>,

    /// Targeted Vivado version
    #[arg(long)]
    pub vivado_version: Option<String>,

    /// Build directory, relative to the .flt file
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,
}

impl ProjectArgs {
    /// Loads the configuration and applies the command line overrides.
    fn load_config(&self, manifest_dir: &Path) -> Result<FltConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => FltConfig::read_from_path(path)?,
            None => FltConfig::from_manifest_dir(manifest_dir)?,
        };

        if let Some(name) = &self.name {
            config.project_name = Some(name.clone());
        }
        if let Some(part) = &self.part {
            config.part = part.clone();
        }
        if let Some(version) = &self.vivado_version {
            config.vivado_version = version.clone();
        }
        if let Some(build_dir) = &self.build_dir {
            config.build_dir = build_dir.clone();
        }

        Ok(config)
    }
}

/// Checks that `path` is an existing `.flt` file and returns its absolute form.
pub fn validate_top_level(path: &Path) -> Result<PathBuf, CliError> {
    let path = flt_parser::absolute(path)?;
    tracing::info!("Top level flt file: \"{}\"", path.display());

    if !path.is_file() {
        return Err(NotAFileError { path }.into());
    }
    if !is_manifest(&path) {
        return Err(ExtensionError { path }.into());
    }

    Ok(path)
}

/// Run the command.
pub fn run_generate(args: FltArgs) -> Result<(), CliError> {
    tracing::debug!("Script version: {}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Arguments: {:?}", args);

    let top = validate_top_level(&args.flt)?;

    let mut resolver = Resolver::new();
    let files = resolver.resolve(&top)?;
    for skipped in resolver.skipped() {
        tracing::info!(
            "Skipped \"{}\", it was already expanded earlier.",
            skipped.display()
        );
    }

    if args.print_only {
        ui::print_file_list(&files)?;
        return Ok(());
    }

    // An absolute, normalized file path always has a parent and a stem.
    let base_dir = top.parent().unwrap_or(Path::new("/"));
    let stem = top
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let config = args.project.load_config(base_dir)?;
    let ctx = ProjectContext::new(config.project_name_or(&stem), &config, files);
    let rendered = render_files(&ctx)?;

    let build_dir = config.build_dir_from_base(base_dir);
    prepare_build_dir(&build_dir)?;
    write_generated(&build_dir, &rendered)?;

    ui::print_generated(&build_dir, rendered.len(), ctx.src_files.len());
    Ok(())
}
