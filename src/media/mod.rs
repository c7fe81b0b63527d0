//! Media type handling.
//!
//! # Responsibilities
//! - Represent media types (`type/subtype`) used as codec registry keys
//! - Parse content-type header values, ignoring parameters
//! - Provide well-known media type constructors

pub mod media_type;

pub use media_type::{InvalidMediaType, MediaType};
