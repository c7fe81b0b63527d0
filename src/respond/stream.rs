//! Stream transform derived from a responder.

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::{Request, Response};
use futures_util::{Stream, StreamExt};

use crate::codec::CodecRegistry;
use crate::error::RespondError;
use crate::respond::{Responder, ResponderContext};

/// Map a stream of requests to a stream of responses through `responder`.
///
/// One response (or error) item per request, in request order: each request
/// is awaited before the next is taken from the stream. Synchronous
/// rejections appear as error items in the same position.
pub fn respond_stream<R, S>(
    responder: Arc<R>,
    registry: Arc<CodecRegistry>,
    requests: S,
) -> impl Stream<Item = Result<Response<Bytes>, RespondError>>
where
    R: Responder + 'static,
    S: Stream<Item = Request<Bytes>>,
{
    requests.then(move |request| {
        let responder = responder.clone();
        let cx = ResponderContext::new(registry.clone());
        async move {
            match responder.respond(request, &cx) {
                Ok(future) => future.await,
                Err(e) => Err(e),
            }
        }
    })
}
