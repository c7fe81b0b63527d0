//! Plain text codec for `text/plain` bodies.
//!
//! Scalars (strings, numbers, booleans) encode to their textual form; any
//! structured value is rejected since `text/plain` has no nesting syntax.
//! Decoding always yields a string value.

use axum::body::Bytes;
use serde_json::Value;

use super::{ContentDecoder, ContentEncoder};
use crate::error::ContentError;

/// Encoder/decoder for `text/plain`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextCodec;

impl ContentEncoder for PlainTextCodec {
    fn encode(&self, value: Value) -> Result<Bytes, ContentError> {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(ContentError::codec(format!(
                    "cannot encode non-scalar value as text/plain: {other}"
                )))
            }
        };
        Ok(Bytes::from(text))
    }
}

impl ContentDecoder for PlainTextCodec {
    fn decode(&self, body: &Bytes) -> Result<Value, ContentError> {
        let text = std::str::from_utf8(body).map_err(ContentError::codec)?;
        Ok(Value::String(text.to_string()))
    }
}
