//! A minimal keyed blob store for Plain Old Rust Structs.
//!
//! Records derive [`Record`], which tells the store their type name and which
//! field is the identifier. The store encodes each record with a [`Codec`] and
//! writes it to `<root>/<type-name>/<id>` through a [`ByteStore`].
//!
//! The namespace is the bare type name, so generic types cannot derive
//! `Record`:
//!
//! ```compile_fail
//! use burrow_db::Record;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Record)]
//! struct Envelope<T> {
//!     id: u32,
//!     body: T,
//! }
//! ```

mod byte_store;
mod codec;
mod error;
mod record;
mod store;

pub use byte_store::{ByteStore, FsByteStore, InMemoryByteStore};
pub use codec::{BitcodeCodec, Codec, CodecError, JsonCodec};
pub use error::{Result, StoreError};
pub use record::{
    capture_field, resolve_identifier_field, FieldDescriptor, FieldValue, IdToken, Record,
    RecordDescriptor, RecordKind, TokenError, ID_NAME,
};
pub use store::{RecordRepository, Store, StoreConfig, DEFAULT_ROOT, ROOT_ENV_VAR};

// Re-export the derive macro under the trait's name
pub use burrow_db_macros::Record;
