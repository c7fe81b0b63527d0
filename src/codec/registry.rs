//! Codec registry mapping media types to encoders and decoders.
//!
//! # Responsibilities
//! - Hold the media-type → encoder and media-type → decoder maps
//! - Resolve codecs on every encode/decode call (`require_*`)
//!
//! # Design Decisions
//! - Explicitly constructed and passed by shared ownership; no global state
//! - Registration takes `&mut self`, so a registry wrapped in `Arc` is
//!   immutable and concurrent reads need no locking
//! - Last registration wins; replacing an existing codec is logged

use std::collections::HashMap;
use std::sync::Arc;

use super::{ContentDecoder, ContentEncoder, JsonCodec, PlainTextCodec};
use crate::error::ContentError;
use crate::media::MediaType;

/// Registry of codecs keyed by media type.
pub struct CodecRegistry {
    encoders: HashMap<MediaType, Arc<dyn ContentEncoder>>,
    decoders: HashMap<MediaType, Arc<dyn ContentDecoder>>,
}

impl CodecRegistry {
    /// Create a registry with no codecs registered.
    pub fn empty() -> Self {
        Self {
            encoders: HashMap::new(),
            decoders: HashMap::new(),
        }
    }

    /// Create a registry with the built-in codecs: JSON for
    /// `application/json` and plain text for `text/plain`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_encoder(MediaType::json(), Arc::new(JsonCodec));
        registry.register_decoder(MediaType::json(), Arc::new(JsonCodec));
        registry.register_encoder(MediaType::plain_text(), Arc::new(PlainTextCodec));
        registry.register_decoder(MediaType::plain_text(), Arc::new(PlainTextCodec));
        registry
    }

    /// Register an encoder for `media_type`, replacing any existing one.
    pub fn register_encoder(&mut self, media_type: MediaType, encoder: Arc<dyn ContentEncoder>) {
        if self.encoders.insert(media_type.clone(), encoder).is_some() {
            tracing::debug!(media_type = %media_type, "Replaced registered encoder");
        }
    }

    /// Register a decoder for `media_type`, replacing any existing one.
    pub fn register_decoder(&mut self, media_type: MediaType, decoder: Arc<dyn ContentDecoder>) {
        if self.decoders.insert(media_type.clone(), decoder).is_some() {
            tracing::debug!(media_type = %media_type, "Replaced registered decoder");
        }
    }

    /// Look up the encoder for `media_type`.
    pub fn require_encoder(
        &self,
        media_type: &MediaType,
    ) -> Result<&Arc<dyn ContentEncoder>, ContentError> {
        self.encoders
            .get(media_type)
            .ok_or_else(|| ContentError::NoEncoder(media_type.clone()))
    }

    /// Look up the decoder for `media_type`.
    pub fn require_decoder(
        &self,
        media_type: &MediaType,
    ) -> Result<&Arc<dyn ContentDecoder>, ContentError> {
        self.decoders
            .get(media_type)
            .ok_or_else(|| ContentError::NoDecoder(media_type.clone()))
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}
