//! Codec subsystem - serialization/deserialization for message bodies.
//!
//! # Responsibilities
//! - Define the encoder/decoder capabilities looked up by media type
//! - Provide built-in codecs: [`JsonCodec`], [`PlainTextCodec`]
//! - Hold the codec registry consulted on every encode/decode call
//!
//! # Design Decisions
//! - Codec traits are object-safe: the registry stores `Arc<dyn ...>` and
//!   values cross the boundary as `serde_json::Value`, the crate's neutral
//!   in-memory data model. The typed edge (`Serialize`/`DeserializeOwned`)
//!   lives in the generic `ContentContainer` methods.
//! - Encoders return bytes; the container performs the message mutation so
//!   the `&mut` borrow of the message stays in one place.

pub mod json;
pub mod plain;
pub mod registry;

use axum::body::Bytes;
use serde_json::Value;

use crate::error::ContentError;

pub use json::JsonCodec;
pub use plain::PlainTextCodec;
pub use registry::CodecRegistry;

/// Serializes values into message body bytes for one media type.
pub trait ContentEncoder: Send + Sync {
    /// Serialize `value` into body bytes.
    fn encode(&self, value: Value) -> Result<Bytes, ContentError>;
}

/// Deserializes message body bytes for one media type.
pub trait ContentDecoder: Send + Sync {
    /// Parse the whole body into a value.
    fn decode(&self, body: &Bytes) -> Result<Value, ContentError>;

    /// Extract the value at `path` without handing the caller the full
    /// containing structure. `path` segments select object fields; segments
    /// that parse as an index select array elements.
    fn get(&self, body: &Bytes, path: &[&str]) -> Result<Value, ContentError> {
        let mut current = self.decode(body)?;
        for segment in path {
            current = match current {
                Value::Object(mut map) => map
                    .remove(*segment)
                    .ok_or_else(|| ContentError::codec(format!("key {segment:?} not found")))?,
                Value::Array(mut items) => {
                    let index: usize = segment.parse().map_err(|_| {
                        ContentError::codec(format!("expected array index, got {segment:?}"))
                    })?;
                    if index >= items.len() {
                        return Err(ContentError::codec(format!("index {index} out of bounds")));
                    }
                    items.swap_remove(index)
                }
                other => {
                    return Err(ContentError::codec(format!(
                        "cannot descend into {} with key {segment:?}",
                        value_kind(&other)
                    )))
                }
            };
        }
        Ok(current)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
