use crate::model::user::{CreateUserRequest, UserResponse};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let registered_user = registry.user_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse::from(registered_user)),
    ))
}
