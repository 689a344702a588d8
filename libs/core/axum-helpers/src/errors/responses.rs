//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorResponse, NotFoundResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "error_type": "Bad request",
        "error_messages": [
            "\"from\" is required",
            "\"to\" contains invalid email(s)"
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Route or method not found",
    content_type = "application/json",
    example = json!({
        "url": "/api/unknown not found"
    })
)]
pub struct UrlNotFoundResponse(pub NotFoundResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error_type": "Internal server error",
        "error_messages": ["An unexpected error occurred"]
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
