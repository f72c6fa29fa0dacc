//! Codecs - the pluggable serialization capability.
//!
//! The store never looks inside encoded bytes; it hands whole records to a
//! [`Codec`] on the way in and asks it to rebuild them on the way out.

mod binary;
mod json;

use serde::{de::DeserializeOwned, Serialize};

pub use binary::BitcodeCodec;
pub use json::JsonCodec;

/// Boxed cause carried by encode/decode failures.
pub type CodecError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Converts records to and from bytes.
pub trait Codec: Send + Sync {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}
