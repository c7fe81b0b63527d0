//! JSON codec backed by `serde_json`.

use axum::body::Bytes;
use serde_json::Value;

use super::{ContentDecoder, ContentEncoder};
use crate::error::ContentError;

/// Encoder/decoder for `application/json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl ContentEncoder for JsonCodec {
    fn encode(&self, value: Value) -> Result<Bytes, ContentError> {
        let bytes = serde_json::to_vec(&value).map_err(ContentError::codec)?;
        Ok(Bytes::from(bytes))
    }
}

impl ContentDecoder for JsonCodec {
    fn decode(&self, body: &Bytes) -> Result<Value, ContentError> {
        serde_json::from_slice(body).map_err(ContentError::codec)
    }
}
