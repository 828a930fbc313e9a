//! Error types.

use std::io;
use std::path::PathBuf;

/// Failure while converting a file. Rendering itself cannot fail; only the
/// file system boundary can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output {} would overwrite the input file", .path.display())]
    OverwritesInput { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
