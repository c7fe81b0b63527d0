//! Responder subsystem.
//!
//! # Data Flow
//! ```text
//! Request<Bytes> + ResponderContext
//!     → responder.rs (Responder capability, sync accept/reject)
//!     → future resolves to exactly one Response<Bytes> or one error
//!
//! Adapters:
//!     service.rs  — tower::Service over any Responder
//!     stream.rs   — request stream → response stream, order preserved
//! ```

pub mod responder;
pub mod service;
pub mod stream;

pub use responder::{Responder, ResponderContext, ResponderFn, ResponseFuture};
pub use service::ResponderService;
pub use stream::respond_stream;
