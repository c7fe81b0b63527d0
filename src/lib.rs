//! Responder abstraction and content negotiation layer for HTTP services.

pub mod codec;
pub mod content;
pub mod error;
pub mod media;
pub mod respond;

pub use codec::{CodecRegistry, ContentDecoder, ContentEncoder, JsonCodec, PlainTextCodec};
pub use content::{Content, ContentContainer, ContentMessage, MessageContentExt};
pub use error::{ContentError, RespondError};
pub use media::MediaType;
pub use respond::{
    respond_stream, Responder, ResponderContext, ResponderFn, ResponderService, ResponseFuture,
};
