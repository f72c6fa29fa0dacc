use std::fs;
use std::io;
use std::path::Path;

use super::ByteStore;

/// Filesystem byte store. Writes go straight to the target file with no staging.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsByteStore;

impl ByteStore for FsByteStore {
    fn ensure_dir(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        fs::write(path, bytes)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}
