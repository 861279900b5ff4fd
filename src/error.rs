//! src/error.rs
use std::path::PathBuf;

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Fatal at startup: a sizes list the job cannot run with.
#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("no n-gram sizes were requested")]
    EmptySizes,
    #[error("n-gram size {0} is out of the supported range 1-5")]
    SizeOutOfRange(u64),
    #[error("invalid n-gram size entry: {entry:?}")]
    InvalidSize {
        entry: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl std::fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

/// A document that could not be delivered to the pipeline. Fatal to that
/// document's unit of work; retry policy belongs to the caller.
#[derive(thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read document {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to list input directory {path:?}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl std::fmt::Debug for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}
