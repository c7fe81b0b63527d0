//! Content negotiation subsystem.
//!
//! # Data Flow
//! ```text
//! Request/Response (mutable message)
//!     → message.rs (body + content-type access)
//!     → container.rs (ContentContainer view)
//!     → codec registry (resolve encoder/decoder by media type)
//!     → codec (serialize/deserialize body bytes)
//! ```
//!
//! # Design Decisions
//! - The container borrows one message for the duration of a single call;
//!   it has no identity or state of its own
//! - Decoder resolution order: empty body → no content, missing/unparseable
//!   content-type → no content type, then registry lookup

pub mod container;
pub mod message;

pub use container::{Content, ContentContainer};
pub use message::{ContentMessage, MessageContentExt};
