//! InMemoryByteStore - HashMap-backed byte store for testing and development.

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use super::ByteStore;

#[derive(Default)]
struct Storage {
    dirs: HashSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

/// In-memory byte store that mirrors filesystem rules closely enough to test against:
/// a file can only be written inside a directory that was ensured first.
///
/// Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryByteStore {
    storage: Arc<RwLock<Storage>>,
}

impl InMemoryByteStore {
    /// Create a new empty byte store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths of all stored files, sorted.
    pub fn paths(&self) -> io::Result<Vec<PathBuf>> {
        let storage = self.storage.read().map_err(|_| poisoned())?;
        Ok(storage.files.keys().cloned().collect())
    }

    /// True if `dir` has been created.
    pub fn has_dir(&self, dir: &Path) -> io::Result<bool> {
        let storage = self.storage.read().map_err(|_| poisoned())?;
        Ok(storage.dirs.contains(dir))
    }
}

impl ByteStore for InMemoryByteStore {
    fn ensure_dir(&self, dir: &Path) -> io::Result<()> {
        let mut storage = self.storage.write().map_err(|_| poisoned())?;

        let ancestors: Vec<&Path> = dir
            .ancestors()
            .take_while(|ancestor| !ancestor.as_os_str().is_empty())
            .collect();

        // Nothing is created unless the whole chain can be.
        if let Some(file) = ancestors.iter().find(|a| storage.files.contains_key(**a)) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a file", file.display()),
            ));
        }
        for ancestor in ancestors {
            storage.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut storage = self.storage.write().map_err(|_| poisoned())?;

        if storage.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is a directory", path.display()),
            ));
        }
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !storage.dirs.contains(parent) => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("directory {} does not exist", parent.display()),
                ));
            }
            _ => {}
        }

        storage.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let storage = self.storage.read().map_err(|_| poisoned())?;

        storage.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }
}

fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "byte store lock poisoned")
}
