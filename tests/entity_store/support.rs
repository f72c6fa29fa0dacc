//! Test doubles for the entity store tests.

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use burrow_db::{ByteStore, InMemoryByteStore, JsonCodec, Store, StoreConfig};

pub const ROOT: &str = "mem";

pub fn memory_store() -> (Store<InMemoryByteStore, JsonCodec>, InMemoryByteStore) {
    let bytes = InMemoryByteStore::new();
    let store = Store::with_parts(
        StoreConfig::new().with_root(ROOT),
        bytes.clone(),
        JsonCodec::new(),
    )
    .unwrap();
    (store, bytes)
}

/// Byte store whose operations can be switched to fail.
#[derive(Clone, Default)]
pub struct FaultyByteStore {
    inner: InMemoryByteStore,
    fail_ensure: Arc<AtomicBool>,
    fail_write: Arc<AtomicBool>,
    fail_read: Arc<AtomicBool>,
}

impl FaultyByteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_ensure(&self, on: bool) {
        self.fail_ensure.store(on, Ordering::SeqCst);
    }

    pub fn fail_write(&self, on: bool) {
        self.fail_write.store(on, Ordering::SeqCst);
    }

    pub fn fail_read(&self, on: bool) {
        self.fail_read.store(on, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool) -> io::Result<()> {
        if flag.load(Ordering::SeqCst) {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "injected fault"))
        } else {
            Ok(())
        }
    }
}

impl ByteStore for FaultyByteStore {
    fn ensure_dir(&self, dir: &Path) -> io::Result<()> {
        Self::check(&self.fail_ensure)?;
        self.inner.ensure_dir(dir)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        Self::check(&self.fail_write)?;
        self.inner.write(path, bytes)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        Self::check(&self.fail_read)?;
        self.inner.read(path)
    }
}
