use axum::{
    extract::OriginalUri,
    response::{IntoResponse, Response},
};

use super::AppError;

/// Fallback handler for unknown routes and unsupported methods.
///
/// Responds `404 {"url": "<path> not found"}`, echoing the query string too.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    AppError::NotFound(url).into_response()
}
