//! RecordRepository - Typed accessor for one record type.

use std::marker::PhantomData;
use std::path::PathBuf;

use serde::Serialize;

use super::Store;
use crate::byte_store::ByteStore;
use crate::codec::Codec;
use crate::error::Result;
use crate::record::Record;

/// Typed repository wrapper for accessing records of a specific type.
///
/// Provides short method names by delegating to [`Store`].
pub struct RecordRepository<'a, B, C, T> {
    store: &'a Store<B, C>,
    _marker: PhantomData<T>,
}

impl<'a, B: ByteStore, C: Codec, T: Record> RecordRepository<'a, B, C, T> {
    pub fn new(store: &'a Store<B, C>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Put a record, replacing any stored record with the same identifier.
    pub fn put(&self, record: &T) -> Result<()> {
        self.store.put(record)
    }

    /// Get a record by identifier.
    pub fn get<I: Serialize + ?Sized>(&self, id: &I) -> Result<T> {
        self.store.get_by_id(id)
    }

    /// Get a record by identifier, or `None` if it was never stored.
    pub fn find<I: Serialize + ?Sized>(&self, id: &I) -> Result<Option<T>> {
        match self.store.get_by_id(id) {
            Ok(record) => Ok(Some(record)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Load a record into an existing value.
    pub fn get_into<I: Serialize + ?Sized>(&self, dst: &mut T, id: &I) -> Result<()> {
        self.store.get_into(dst, id)
    }

    /// Where a record with this identifier lives.
    pub fn path<I: Serialize + ?Sized>(&self, id: &I) -> Result<PathBuf> {
        self.store.entity_path::<T, I>(id)
    }
}

impl<B: ByteStore, C: Codec> Store<B, C> {
    /// Get a typed record repository.
    pub fn records<T: Record>(&self) -> RecordRepository<'_, B, C, T> {
        RecordRepository::new(self)
    }
}
