//! Byte stores - durable, path-addressed storage for encoded records.
//!
//! A byte store knows nothing about records. It creates directories, writes
//! whole files and reads them back, reporting an absent path as
//! [`std::io::ErrorKind::NotFound`].

mod fs;
mod in_memory;

use std::io;
use std::path::Path;

pub use fs::FsByteStore;
pub use in_memory::InMemoryByteStore;

/// Path-addressed byte storage.
pub trait ByteStore: Send + Sync {
    /// Create `dir` and any missing parents. Succeeds if it already exists.
    fn ensure_dir(&self, dir: &Path) -> io::Result<()>;

    /// Replace the contents at `path` with `bytes`.
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;

    /// Read the full contents at `path`. An absent path is `ErrorKind::NotFound`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}
