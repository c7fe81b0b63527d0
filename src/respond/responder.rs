//! The responder capability and its execution context.
//!
//! # Responsibilities
//! - Define the request → future-response contract
//! - Carry per-request context (codec registry, request id, task spawning)
//! - Adapt plain async closures into responders
//!
//! # Design Decisions
//! - `respond` returns `Result<ResponseFuture, _>`: a synchronous `Err`
//!   rejects the request before any asynchronous work begins; once `Ok`,
//!   the future resolves exactly once
//! - No retry, timeout, or cancellation at this layer; those belong to the
//!   caller or the surrounding runtime

use std::future::Future;
use std::sync::Arc;

use axum::body::Bytes;
use axum::http::{Request, Response};
use futures_util::future::BoxFuture;
use uuid::Uuid;

use crate::codec::CodecRegistry;
use crate::error::RespondError;

/// Future resolving to exactly one response or one failure.
pub type ResponseFuture = BoxFuture<'static, Result<Response<Bytes>, RespondError>>;

/// Capability producing a future response from a request.
pub trait Responder: Send + Sync {
    /// Handle `request`, either rejecting it synchronously or returning the
    /// future that produces its response.
    fn respond(
        &self,
        request: Request<Bytes>,
        cx: &ResponderContext,
    ) -> Result<ResponseFuture, RespondError>;
}

impl<R: Responder + ?Sized> Responder for Arc<R> {
    fn respond(
        &self,
        request: Request<Bytes>,
        cx: &ResponderContext,
    ) -> Result<ResponseFuture, RespondError> {
        (**self).respond(request, cx)
    }
}

/// Per-request execution context handed to responders.
#[derive(Clone)]
pub struct ResponderContext {
    registry: Arc<CodecRegistry>,
    request_id: String,
}

impl ResponderContext {
    /// Create a context with a fresh request id.
    pub fn new(registry: Arc<CodecRegistry>) -> Self {
        Self {
            registry,
            request_id: Uuid::new_v4().to_string(),
        }
    }

    /// Codec registry shared with this request.
    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    /// Unique id for this request, for log correlation.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Spawn background work on the runtime. The response future must not
    /// depend on the spawned task completing.
    pub fn spawn<F>(&self, future: F) -> tokio::task::JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        tokio::spawn(future)
    }
}

/// Adapts an async closure into a [`Responder`].
pub struct ResponderFn<F> {
    f: F,
}

impl<F> ResponderFn<F> {
    /// Wrap `f` as a responder.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, Fut> Responder for ResponderFn<F>
where
    F: Fn(Request<Bytes>, ResponderContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Response<Bytes>, RespondError>> + Send + 'static,
{
    fn respond(
        &self,
        request: Request<Bytes>,
        cx: &ResponderContext,
    ) -> Result<ResponseFuture, RespondError> {
        Ok(Box::pin((self.f)(request, cx.clone())))
    }
}
