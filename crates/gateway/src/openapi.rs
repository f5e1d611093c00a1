//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::{CacheHealth, HealthResponse};
use domain::{AggregatedUserView, RepoView};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::get_user,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            AggregatedUserView,
            RepoView,
            HealthResponse,
            CacheHealth,
        )
    ),
    tags(
        (name = "Users", description = "Aggregated upstream user details"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
