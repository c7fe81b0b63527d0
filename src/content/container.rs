//! Content container: typed encode/decode over one message.
//!
//! # Responsibilities
//! - Resolve codecs from the registry (default media type, explicit media
//!   type, or the message's declared content type)
//! - Write encoded bodies and the matching content-type header in place
//! - Read whole values or key-path projections out of the body
//!
//! # Design Decisions
//! - Transient view: holds `&mut` to the message plus `&` to the registry,
//!   so mutations are immediately visible to the caller
//! - Typed values cross the codec boundary as `serde_json::Value`

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{CodecRegistry, ContentDecoder};
use crate::content::ContentMessage;
use crate::error::ContentError;
use crate::media::MediaType;

/// A value that can ride in a message body, with a preferred media type.
///
/// The default is JSON; override [`Content::default_media_type`] for types
/// that belong to another codec.
pub trait Content: Serialize + DeserializeOwned {
    /// Media type used by [`ContentContainer::encode`] when the caller does
    /// not pick one explicitly.
    fn default_media_type() -> MediaType {
        MediaType::json()
    }
}

/// Plain strings default to `text/plain`.
impl Content for String {
    fn default_media_type() -> MediaType {
        MediaType::plain_text()
    }
}

impl Content for serde_json::Value {}

/// Transient encode/decode view over one message.
pub struct ContentContainer<'a, M: ContentMessage> {
    message: &'a mut M,
    registry: &'a CodecRegistry,
}

impl<'a, M: ContentMessage> ContentContainer<'a, M> {
    /// Wrap `message`, resolving codecs against `registry`.
    pub fn new(message: &'a mut M, registry: &'a CodecRegistry) -> Self {
        Self { message, registry }
    }

    /// Encode `value` using its default media type.
    pub fn encode<T: Content>(&mut self, value: &T) -> Result<(), ContentError> {
        self.encode_as(value, &T::default_media_type())
    }

    /// Encode `value` as `media_type`.
    ///
    /// On success the message body holds the serialized bytes and the
    /// content-type header names `media_type`.
    pub fn encode_as<T: Serialize>(
        &mut self,
        value: &T,
        media_type: &MediaType,
    ) -> Result<(), ContentError> {
        let encoder = self.registry.require_encoder(media_type)?;
        let value = serde_json::to_value(value).map_err(ContentError::codec)?;
        let body = encoder.encode(value)?;
        tracing::debug!(media_type = %media_type, bytes = body.len(), "Encoded message body");
        self.message.set_body(body);
        self.message.set_content_type(media_type)
    }

    /// Decode the whole body into a `T`, resolving the decoder from the
    /// message's declared content type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ContentError> {
        let decoder = self.require_decoder()?;
        let value = decoder.decode(self.message.body())?;
        serde_json::from_value(value).map_err(ContentError::codec)
    }

    /// Decode the whole body with an explicit decoder, bypassing the
    /// registry and the content-type header entirely.
    pub fn decode_with<T: DeserializeOwned>(
        &self,
        decoder: &dyn ContentDecoder,
    ) -> Result<T, ContentError> {
        let value = decoder.decode(self.message.body())?;
        serde_json::from_value(value).map_err(ContentError::codec)
    }

    /// Decode the single value at `path` inside the body, without handing
    /// back the full containing structure.
    pub fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T, ContentError> {
        let decoder = self.require_decoder()?;
        let value = decoder.get(self.message.body(), path)?;
        serde_json::from_value(value).map_err(ContentError::codec)
    }

    /// Decoder resolution precondition. Checked in order: content present,
    /// content type declared, decoder registered.
    fn require_decoder(&self) -> Result<&Arc<dyn ContentDecoder>, ContentError> {
        if self.message.body().is_empty() {
            return Err(ContentError::NoContent);
        }
        let media_type = self
            .message
            .content_type()
            .ok_or(ContentError::NoContentType)?;
        self.registry.require_decoder(&media_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::JsonCodec;
    use crate::content::MessageContentExt;
    use axum::body::Bytes;
    use axum::http::{Request, Response};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Widget {
        name: String,
        count: u32,
    }

    impl Content for Widget {}

    fn empty_response() -> Response<Bytes> {
        Response::new(Bytes::new())
    }

    #[test]
    fn test_encode_sets_body_and_content_type() {
        let registry = CodecRegistry::new();
        let mut response = empty_response();

        let widget = Widget {
            name: "bolt".into(),
            count: 7,
        };
        response.content(&registry).encode(&widget).unwrap();

        assert_eq!(
            ContentMessage::content_type(&response),
            Some(MediaType::json())
        );
        let expected = serde_json::to_vec(&widget).unwrap();
        assert_eq!(&ContentMessage::body(&response)[..], &expected[..]);
    }

    #[test]
    fn test_encode_default_media_type_for_string() {
        let registry = CodecRegistry::new();
        let mut response = empty_response();

        response
            .content(&registry)
            .encode(&String::from("hello"))
            .unwrap();

        assert_eq!(
            ContentMessage::content_type(&response),
            Some(MediaType::plain_text())
        );
        assert_eq!(&ContentMessage::body(&response)[..], b"hello");
    }

    #[test]
    fn test_encode_unregistered_media_type() {
        let registry = CodecRegistry::empty();
        let mut response = empty_response();

        let err = response
            .content(&registry)
            .encode_as(&42u32, &MediaType::json())
            .unwrap_err();
        assert!(matches!(err, ContentError::NoEncoder(_)));
    }

    #[test]
    fn test_round_trip() {
        let registry = CodecRegistry::new();
        let mut response = empty_response();

        let widget = Widget {
            name: String::new(),
            count: 0,
        };
        response.content(&registry).encode(&widget).unwrap();
        let decoded: Widget = response.content(&registry).decode().unwrap();
        assert_eq!(decoded, widget);
    }

    #[test]
    fn test_decode_empty_body_is_no_content() {
        let registry = CodecRegistry::new();
        // Content type declared, body empty: NoContent wins.
        let mut request = Request::builder()
            .header("content-type", "application/json")
            .body(Bytes::new())
            .unwrap();

        let err = request.content(&registry).decode::<Widget>().unwrap_err();
        assert!(matches!(err, ContentError::NoContent));
    }

    #[test]
    fn test_decode_missing_content_type() {
        let registry = CodecRegistry::new();
        let mut request = Request::builder()
            .body(Bytes::from_static(b"{\"name\":\"x\",\"count\":1}"))
            .unwrap();

        let err = request.content(&registry).decode::<Widget>().unwrap_err();
        assert!(matches!(err, ContentError::NoContentType));
    }

    #[test]
    fn test_decode_unregistered_media_type() {
        let registry = CodecRegistry::new();
        let mut request = Request::builder()
            .header("content-type", "application/msgpack")
            .body(Bytes::from_static(b"\x81"))
            .unwrap();

        let err = request.content(&registry).decode::<Widget>().unwrap_err();
        assert!(matches!(err, ContentError::NoDecoder(_)));
    }

    #[test]
    fn test_decode_with_explicit_decoder() {
        let registry = CodecRegistry::empty();
        // No content-type header and an empty registry; the explicit
        // decoder is used regardless.
        let mut request = Request::builder()
            .body(Bytes::from_static(b"{\"name\":\"nut\",\"count\":2}"))
            .unwrap();

        let widget: Widget = request
            .content(&registry)
            .decode_with(&JsonCodec)
            .unwrap();
        assert_eq!(widget.count, 2);
    }

    #[test]
    fn test_decode_type_mismatch() {
        let registry = CodecRegistry::new();
        let mut request = Request::builder()
            .header("content-type", "text/plain")
            .body(Bytes::from_static(b"just text"))
            .unwrap();

        let err = request.content(&registry).decode::<Widget>().unwrap_err();
        assert!(matches!(err, ContentError::Codec(_)));

        // The same body decodes fine as a string.
        let text: String = request.content(&registry).decode().unwrap();
        assert_eq!(text, "just text");
    }

    #[test]
    fn test_get_matches_manual_projection() {
        #[derive(Serialize, Deserialize)]
        struct Order {
            customer: Customer,
        }
        #[derive(Serialize, Deserialize)]
        struct Customer {
            address: Address,
        }
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Address {
            city: String,
        }
        impl Content for Order {}

        let registry = CodecRegistry::new();
        let mut request = Request::new(Bytes::new());
        let order = Order {
            customer: Customer {
                address: Address {
                    city: "Lagos".into(),
                },
            },
        };
        request.content(&registry).encode(&order).unwrap();

        let city: String = request
            .content(&registry)
            .get(&["customer", "address", "city"])
            .unwrap();

        let whole: Order = request.content(&registry).decode().unwrap();
        assert_eq!(city, whole.customer.address.city);
    }
}
