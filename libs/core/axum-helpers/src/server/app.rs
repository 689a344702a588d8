use super::shutdown::shutdown_signal;
use crate::errors::{AppError, handlers::not_found};
use crate::http::security::security_headers;
use axum::{
    Json, Router, middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::server::ServerConfig;
use std::any::Any;
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// Logs `Server started on: <port>` once the listener is bound.
///
/// # Errors
/// Returns an error if the TCP listener fails to bind or the server fails
/// while running.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.socket_addr()).await?;
    let local_addr = listener.local_addr()?;

    info!(address = %local_addr, "Server started on: {}", local_addr.port());
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wraps API routes with the cross-cutting pieces every service shares.
///
/// - API routes nested under `/api`
/// - OpenAPI document at `/api-docs/openapi.json`
/// - `404 {"url": "<path> not found"}` fallback
/// - request tracing, security headers, and a panic guard that logs the
///   panic and answers 500 instead of dropping the connection
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/emails", emails_router);
/// let router = create_router::<ApiDoc>(api_routes);
/// ```
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(T::openapi()) }),
        )
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %details, "Request handler panicked");
    AppError::InternalServerError("An unexpected error occurred".to_string()).into_response()
}
