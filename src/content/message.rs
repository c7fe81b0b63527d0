//! Message abstraction over HTTP requests and responses.
//!
//! A content message is anything with a mutable byte body and an optional
//! declared content type. Both `http::Request<Bytes>` and
//! `http::Response<Bytes>` qualify; the container layer is written against
//! this trait so encode/decode works identically on either side.

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Request, Response};

use crate::codec::CodecRegistry;
use crate::content::ContentContainer;
use crate::error::ContentError;
use crate::media::MediaType;

/// A mutable HTTP message the content layer can read and write.
pub trait ContentMessage {
    /// The message body. Empty bytes model an absent body.
    fn body(&self) -> &Bytes;

    /// Replace the message body.
    fn set_body(&mut self, body: Bytes);

    /// The declared content type, if the header is present and parseable.
    fn content_type(&self) -> Option<MediaType>;

    /// Set the content-type header to `media_type`.
    fn set_content_type(&mut self, media_type: &MediaType) -> Result<(), ContentError>;
}

macro_rules! impl_content_message {
    ($message:ty) => {
        impl ContentMessage for $message {
            fn body(&self) -> &Bytes {
                self.body()
            }

            fn set_body(&mut self, body: Bytes) {
                *self.body_mut() = body;
            }

            fn content_type(&self) -> Option<MediaType> {
                self.headers()
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
            }

            fn set_content_type(&mut self, media_type: &MediaType) -> Result<(), ContentError> {
                let value = HeaderValue::from_str(&media_type.to_string())
                    .map_err(ContentError::codec)?;
                self.headers_mut().insert(CONTENT_TYPE, value);
                Ok(())
            }
        }
    };
}

impl_content_message!(Request<Bytes>);
impl_content_message!(Response<Bytes>);

/// Entry point for content negotiation on a message.
pub trait MessageContentExt: ContentMessage + Sized {
    /// View this message through a [`ContentContainer`] backed by `registry`.
    fn content<'a>(&'a mut self, registry: &'a CodecRegistry) -> ContentContainer<'a, Self> {
        ContentContainer::new(self, registry)
    }
}

impl<M: ContentMessage + Sized> MessageContentExt for M {}
