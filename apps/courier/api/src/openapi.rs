use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::NotFoundResponse)
    ),
    info(
        title = "Courier API",
        version = "0.1.0",
        description = "Email relay with SendGrid primary and Mailgun fallback"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/emails", api = domain_emails::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
