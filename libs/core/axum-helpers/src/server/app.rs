use super::shutdown::shutdown_signal;
use crate::errors::handle_timeout_error;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::access_control;
use axum::{Json, Router, body::Body, error_handling::HandleErrorLayer, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::map_request_body::MapRequestBodyLayer;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutBody};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, error, info};
use utoipa::OpenApi;

/// Wraps the API routes with the cross-cutting layers shared by every service.
///
/// Outermost first:
/// - [`access_control`] CORS headers; `OPTIONS` answered before anything else runs
/// - request tracing
/// - write timeout: the whole handler must finish within `write_timeout` (`408`)
/// - read timeout: the request body may sit idle between frames for at most
///   `read_timeout`; a stalled body fails extraction with `400`
///
/// Also serves the OpenAPI document at `/api-docs/openapi.json` and renders
/// unmatched routes and methods with the error envelope.
///
/// Routes are mounted at the root; state must already be applied.
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> Router
where
    T: OpenApi + 'static,
{
    let timeouts = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_timeout_error))
        .layer(TimeoutLayer::new(server_config.write_timeout))
        .layer(RequestBodyTimeoutLayer::new(server_config.read_timeout))
        .layer(MapRequestBodyLayer::new(Body::new::<TimeoutBody<Body>>));

    Router::new()
        .route("/api-docs/openapi.json", get(|| async { Json(T::openapi()) }))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(timeouts)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(access_control))
}

/// Serves `router` on an already bound listener until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, router: Router) -> io::Result<()> {
    info!(url = %listener.local_addr()?, "Listening");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            error!(error = %e, "Server encountered an error");
        })
}

/// Binds `server_config.address()` and serves `router` on a spawned task.
///
/// The receiver yields the listener's terminal result: a bind or accept error,
/// or `Ok(())` after graceful shutdown.
pub fn spawn_app(router: Router, server_config: &ServerConfig) -> oneshot::Receiver<io::Result<()>> {
    let (tx, rx) = oneshot::channel();
    let address = server_config.address().to_string();

    tokio::spawn(async move {
        let result = match TcpListener::bind(&address).await {
            Ok(listener) => serve(listener, router).await,
            Err(e) => Err(e),
        };
        // Receiver gone means main already exited.
        let _ = tx.send(result);
    });

    rx
}
