use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::AppError, service::user::UserService, state::AppState, util::parse::parse_uuid,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "User UUID")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "Malformed user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_uuid("user_id", &user_id)?;

    let user = UserService::new(&state.db).get_by_id(&user_id).await?;

    Ok(Json(user.into_dto()))
}
