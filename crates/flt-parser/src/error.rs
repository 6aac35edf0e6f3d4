use thiserror::Error;

#[derive(Debug, Error)]
pub enum FltParseError {
    /// A `.flt` file could not be opened or read. The message carries the path.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The working directory is needed to make a relative path absolute.
    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}
