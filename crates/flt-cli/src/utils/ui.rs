// CLI output formatting. Logs go to stderr through tracing; results the user
// asked for (file lists, summaries) go to stdout.

use colored::Colorize as _;
use path_slash::PathExt as _;
use std::io::{self, Write as _};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Installs the stderr log subscriber.
///
/// An explicit `level` wins; otherwise `RUST_LOG` is honoured, defaulting to
/// warnings.
pub fn init_logging(level: Option<Level>) {
    let filter = match level {
        Some(level) => EnvFilter::default().add_directive(LevelFilter::from_level(level).into()),
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

/// Prints the resolved file list, one path per line.
pub fn print_file_list(files: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for file in files {
        writeln!(stdout, "{file}")?;
    }
    stdout.flush()
}

pub fn print_generated(build_dir: &Path, file_count: usize, source_count: usize) {
    println!(
        "{} {} ({} files, {} sources)",
        "Generated".dimmed(),
        build_dir.to_slash_lossy().green(),
        file_count.to_string().cyan(),
        source_count.to_string().cyan()
    );
}
