use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    ErrorResponse, JsonBody, NotFoundResponse,
    errors::handlers::not_found,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, UrlNotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::dispatcher::Dispatcher;
use crate::error::EmailResult;
use crate::models::{DispatchResult, SendEmailRequest};

/// OpenAPI documentation for Emails API
#[derive(OpenApi)]
#[openapi(
    paths(send_email),
    components(
        schemas(SendEmailRequest, DispatchResult, ErrorResponse, NotFoundResponse),
        responses(
            BadRequestValidationResponse,
            UrlNotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "emails", description = "Email relay endpoints")
    )
)]
pub struct ApiDoc;

/// Create the emails router.
///
/// Only `POST` is served; any other method on the same path is a 404.
pub fn router(dispatcher: Dispatcher) -> Router {
    let shared_dispatcher = Arc::new(dispatcher);

    Router::new()
        .route("/", post(send_email).fallback(not_found))
        .with_state(shared_dispatcher)
}

/// Send an email through the first reachable provider
#[utoipa::path(
    post,
    path = "",
    tag = "emails",
    request_body = SendEmailRequest,
    responses(
        (status = 200, description = "Email sent or queued", body = DispatchResult),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = UrlNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn send_email(
    State(dispatcher): State<Arc<Dispatcher>>,
    JsonBody(request): JsonBody<SendEmailRequest>,
) -> EmailResult<Json<DispatchResult>> {
    let result = dispatcher.send_email(request).await?;
    Ok(Json(result))
}
