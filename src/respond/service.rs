//! Tower service adapter over a responder.
//!
//! Lets any [`Responder`] sit in a middleware stack or behind an HTTP
//! server: each call gets a fresh context (new request id, shared codec
//! registry), and synchronous rejections surface as already-failed futures.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Bytes;
use axum::http::{Request, Response};
use futures_util::future;
use tower::Service;

use crate::codec::CodecRegistry;
use crate::error::RespondError;
use crate::respond::{Responder, ResponderContext, ResponseFuture};

/// `tower::Service` wrapping a responder.
pub struct ResponderService<R> {
    responder: Arc<R>,
    registry: Arc<CodecRegistry>,
}

impl<R> ResponderService<R> {
    /// Wrap `responder`, resolving codecs against `registry`.
    pub fn new(responder: R, registry: Arc<CodecRegistry>) -> Self {
        Self {
            responder: Arc::new(responder),
            registry,
        }
    }
}

impl<R> Clone for ResponderService<R> {
    fn clone(&self) -> Self {
        Self {
            responder: self.responder.clone(),
            registry: self.registry.clone(),
        }
    }
}

impl<R: Responder + 'static> Service<Request<Bytes>> for ResponderService<R> {
    type Response = Response<Bytes>;
    type Error = RespondError;
    type Future = ResponseFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Responders carry no backpressure; readiness is the runtime's concern.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let cx = ResponderContext::new(self.registry.clone());
        tracing::debug!(
            request_id = %cx.request_id(),
            method = %request.method(),
            path = %request.uri().path(),
            "Dispatching request"
        );

        match self.responder.respond(request, &cx) {
            Ok(future) => future,
            Err(e) => {
                tracing::warn!(request_id = %cx.request_id(), error = %e, "Request rejected");
                Box::pin(future::ready(Err(e)))
            }
        }
    }
}
