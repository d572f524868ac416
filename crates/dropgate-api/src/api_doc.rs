//! OpenAPI document for the HTTP surface.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers::health::HealthResponse;
use crate::handlers::upload::UploadResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "dropgate",
        description = "Accepts file uploads with an optional text comment, stores them in a per-submission remote drive folder, and notifies a recipient by email."
    ),
    paths(crate::handlers::upload::upload, crate::handlers::health::health_check),
    components(schemas(UploadResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "upload", description = "File upload and notification"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
