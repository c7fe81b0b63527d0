//! Error types for content negotiation and responding.

use axum::http::StatusCode;
use thiserror::Error;

use crate::media::MediaType;

/// Errors raised by content encode/decode operations.
///
/// Every failure is terminal and reported to the direct caller; nothing is
/// retried or swallowed inside this layer.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The message body is empty or absent.
    #[error("message has no content")]
    NoContent,

    /// The message declares no content type, so no decoder can be resolved.
    #[error("message has no content type")]
    NoContentType,

    /// No encoder is registered for the requested media type.
    #[error("no encoder registered for media type {0}")]
    NoEncoder(MediaType),

    /// No decoder is registered for the message's declared media type.
    #[error("no decoder registered for media type {0}")]
    NoDecoder(MediaType),

    /// The underlying codec failed (malformed payload, type mismatch,
    /// missing key path).
    #[error("codec error: {0}")]
    Codec(String),
}

impl ContentError {
    /// Wrap an underlying codec failure.
    pub fn codec(err: impl std::fmt::Display) -> Self {
        Self::Codec(err.to_string())
    }
}

/// Errors raised by a [`Responder`](crate::respond::Responder).
#[derive(Debug, Error)]
pub enum RespondError {
    /// Content negotiation failed while building or reading a message.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The request was rejected before any asynchronous work began.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The responder failed while producing the response.
    #[error("responder error: {0}")]
    Internal(String),
}

impl RespondError {
    /// HTTP status a surrounding framework should translate this error into.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Content(ContentError::NoDecoder(_)) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Content(ContentError::NoEncoder(_)) => StatusCode::NOT_ACCEPTABLE,
            Self::Content(ContentError::NoContent)
            | Self::Content(ContentError::NoContentType)
            | Self::Content(ContentError::Codec(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
