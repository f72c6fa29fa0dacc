use serde::{de::DeserializeOwned, Serialize};

use super::{Codec, CodecError};

/// Compact binary codec backed by `bitcode`.
///
/// Not self-describing: `#[serde(flatten)]` records need [`super::JsonCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcodeCodec;

impl Codec for BitcodeCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        Ok(bitcode::serialize(value)?)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        Ok(bitcode::deserialize(bytes)?)
    }
}
