//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Once};

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::{IntoResponse, Response as AxumResponse};
use axum::routing::any;
use axum::Router;
use tower::ServiceExt;

use http_content::{CodecRegistry, Responder, ResponderService};

struct ServerState<R> {
    service: ResponderService<R>,
}

impl<R> Clone for ServerState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

static INIT_TRACING: Once = Once::new();

fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Serve `responder` over real HTTP on an ephemeral port.
/// Returns the bound address.
pub async fn start_responder_server<R>(responder: R, registry: Arc<CodecRegistry>) -> SocketAddr
where
    R: Responder + 'static,
{
    init_tracing();
    let state = ServerState {
        service: ResponderService::new(responder, registry),
    };
    let app = Router::new()
        .route("/{*path}", any(dispatch::<R>))
        .route("/", any(dispatch::<R>))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}

/// Buffer the request body, hand it to the responder service, and translate
/// failures into HTTP error responses via `RespondError::status()`.
async fn dispatch<R: Responder + 'static>(
    State(state): State<ServerState<R>>,
    request: Request<Body>,
) -> AxumResponse {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, 1024 * 1024)
        .await
        .unwrap_or_default();
    let request = Request::from_parts(parts, bytes);

    match state.service.clone().oneshot(request).await {
        Ok(response) => {
            let (parts, body) = response.into_parts();
            AxumResponse::from_parts(parts, Body::from(body))
        }
        Err(e) => (e.status(), e.to_string()).into_response(),
    }
}
