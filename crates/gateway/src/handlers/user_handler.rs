//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use common::{AppError, AppResult};
use domain::AggregatedUserView;

use crate::extractors::ValidatedPath;
use crate::state::AppState;

/// Message returned when the username segment is missing
const EMPTY_USERNAME_MESSAGE: &str = "Username cannot be empty";

/// Path parameters of `GET /users/{username}`
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct UsernamePath {
    /// Upstream login, matched case-sensitively
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(missing_username))
        .route("/users/", get(missing_username))
        .route("/users/:username", get(get_user))
}

/// Get aggregated user profile and repositories
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "Users",
    params(UsernamePath),
    responses(
        (status = 200, description = "Aggregated user profile", body = AggregatedUserView),
        (status = 400, description = "Username is empty"),
        (status = 404, description = "User not found upstream or upstream returned no data"),
        (status = 500, description = "Upstream or internal failure")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<UsernamePath>,
) -> AppResult<Json<AggregatedUserView>> {
    let view = state
        .user_detail_service
        .get_user_detail(&path.username)
        .await?;

    Ok(Json(view))
}

/// `GET /users` and `GET /users/` carry no username
pub async fn missing_username() -> AppError {
    AppError::bad_request(EMPTY_USERNAME_MESSAGE)
}
