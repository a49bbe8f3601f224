//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, password_handler};

/// OpenAPI documentation for the password validator
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Password Validator",
        version = "0.1.0",
        description = "Checks candidate passwords against a fixed strength policy",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        password_handler::validate_password,
        health_handler::health,
    ),
    components(
        schemas(health_handler::HealthResponse)
    ),
    tags(
        (name = "Password", description = "Password policy validation"),
        (name = "Health", description = "Service liveness")
    )
)]
pub struct ApiDoc;
