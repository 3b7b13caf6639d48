//! Error values returned by the table and the counting driver.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of table creation and mutation.
///
/// A lookup miss is not an error: `count_of` returns `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A table was requested with zero slots.
    #[error("table capacity must be at least 1")]
    InvalidCapacity,

    /// A tuning value is outside its accepted range.
    #[error("invalid table configuration: {0}")]
    InvalidConfig(&'static str),

    /// Slot storage or a key copy could not be allocated. The table is left
    /// exactly as it was before the failing call.
    #[error("out of memory while growing the table or copying a key")]
    OutOfMemory,

    /// A probe visited every slot without finding the key or a vacancy.
    /// Unreachable while the load factor stays at or below 1.
    #[error("probe sequence exhausted: no vacant slot")]
    TableFull,
}

/// Failures of `count_reader` / `count_file`.
#[derive(Debug, Error)]
pub enum CountError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read tokens: {0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Table(#[from] TableError),
}
