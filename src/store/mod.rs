//! Store - puts and gets records as files grouped by record type.
//!
//! Every record lives at `<root>/<type-name>/<id-token>`: one directory per
//! record type, one file per record, holding the codec's encoding of it.
//!
//! ## Example
//!
//! ```ignore
//! use burrow_db::{Record, Store, StoreConfig};
//!
//! #[derive(Serialize, Deserialize, Record)]
//! struct Widget {
//!     name: String,
//!     #[burrow(id)]
//!     num: i64,
//! }
//!
//! let store = Store::open(StoreConfig::new().with_root("store"))?;
//! store.put(&Widget { name: "a".into(), num: 123 })?;
//! let widget: Widget = store.get_by_id(&123)?;
//! ```
//!
//! Writes go straight to the target file. A crash mid-write can leave a
//! truncated or missing record, and concurrent writers to the same record
//! race with no ordering guarantee.

mod config;
mod repository;

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

use crate::byte_store::{ByteStore, FsByteStore};
use crate::codec::{Codec, JsonCodec};
use crate::error::{Result, StoreError};
use crate::record::{resolve_identifier_field, IdToken, Record};

pub use config::{StoreConfig, DEFAULT_ROOT, ROOT_ENV_VAR};
pub use repository::RecordRepository;

/// Keyed record store over a byte store and a codec.
///
/// The root is owned by the instance, so stores with different roots coexist.
#[derive(Clone)]
pub struct Store<B = FsByteStore, C = JsonCodec> {
    root: PathBuf,
    bytes: B,
    codec: C,
}

impl Store {
    /// Open a filesystem store using JSON encoding, creating the root directory if needed.
    pub fn open(config: StoreConfig) -> Result<Self> {
        Self::with_parts(config, FsByteStore, JsonCodec::new())
    }
}

impl<B: ByteStore, C: Codec> Store<B, C> {
    /// Build a store from explicit byte store and codec, creating the root directory if needed.
    pub fn with_parts(config: StoreConfig, bytes: B, codec: C) -> Result<Self> {
        let root = config.root;
        bytes
            .ensure_dir(&root)
            .map_err(|source| StoreError::StorageUnavailable {
                path: root.clone(),
                source,
            })?;
        debug!(root = %root.display(), "opened store");

        Ok(Self { root, bytes, codec })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Put a record, replacing whatever was stored under the same type and identifier.
    pub fn put<T: Record>(&self, record: &T) -> Result<()> {
        let descriptor = T::descriptor();
        let type_name = descriptor.type_name();
        if !descriptor.is_struct() {
            return Err(StoreError::InvalidValueKind {
                type_name: type_name.to_string(),
                kind: descriptor.kind(),
            });
        }

        let field = resolve_identifier_field(&descriptor)?;
        let value = record
            .field_value(field.name())
            .ok_or_else(|| StoreError::MissingFieldValue {
                type_name: type_name.to_string(),
                field: field.name().to_string(),
            })?
            .map_err(|source| StoreError::EncodingFailed {
                type_name: type_name.to_string(),
                source,
            })?;
        let token =
            IdToken::from_field(&value).map_err(|err| StoreError::from_token(type_name, err))?;

        let bytes = self
            .codec
            .encode(record)
            .map_err(|source| StoreError::EncodingFailed {
                type_name: type_name.to_string(),
                source,
            })?;

        let dir = self.namespace_dir(type_name);
        trace!(dir = %dir.display(), "ensuring namespace directory");
        self.bytes
            .ensure_dir(&dir)
            .map_err(|source| StoreError::StorageUnavailable {
                path: dir.clone(),
                source,
            })?;

        let path = dir.join(token.as_str());
        self.bytes
            .write(&path, &bytes)
            .map_err(|source| StoreError::StorageWriteFailed {
                path: path.clone(),
                source,
            })?;

        debug!(
            type_name,
            id = %token,
            path = %path.display(),
            len = bytes.len(),
            "put record"
        );
        Ok(())
    }

    /// Get the record of type `T` stored under `id`.
    ///
    /// `id` renders to the same token `put` derived from the identifier field,
    /// so `123` and `"123"` find the same record.
    pub fn get_by_id<T: Record, I: Serialize + ?Sized>(&self, id: &I) -> Result<T> {
        let descriptor = T::descriptor();
        let type_name = descriptor.type_name();
        let (token, path) = self.locate::<T, I>(id)?;

        let bytes = match self.bytes.read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(type_name, id = %token, "no such entity");
                return Err(StoreError::NoSuchEntity {
                    type_name: type_name.to_string(),
                    id: token.to_string(),
                });
            }
            Err(source) => return Err(StoreError::StorageReadFailed { path, source }),
        };

        let record = self
            .codec
            .decode(&bytes)
            .map_err(|source| StoreError::DecodingFailed {
                type_name: type_name.to_string(),
                path: path.clone(),
                source,
            })?;

        debug!(type_name, id = %token, path = %path.display(), "got record");
        Ok(record)
    }

    /// Load the record stored under `id` into `dst`. On error `dst` is left untouched.
    pub fn get_into<T: Record, I: Serialize + ?Sized>(&self, dst: &mut T, id: &I) -> Result<()> {
        *dst = self.get_by_id(id)?;
        Ok(())
    }

    /// The path a record of type `T` with identifier `id` is stored at. Touches no storage.
    pub fn entity_path<T: Record, I: Serialize + ?Sized>(&self, id: &I) -> Result<PathBuf> {
        self.locate::<T, I>(id).map(|(_, path)| path)
    }

    fn locate<T: Record, I: Serialize + ?Sized>(&self, id: &I) -> Result<(IdToken, PathBuf)> {
        let descriptor = T::descriptor();
        let type_name = descriptor.type_name();
        if !descriptor.is_struct() {
            return Err(StoreError::InvalidDestination {
                type_name: type_name.to_string(),
                kind: descriptor.kind(),
            });
        }

        let token =
            IdToken::from_value(id).map_err(|err| StoreError::from_token(type_name, err))?;
        let path = self.namespace_dir(type_name).join(token.as_str());
        Ok((token, path))
    }

    fn namespace_dir(&self, type_name: &str) -> PathBuf {
        self.root.join(type_name)
    }
}
