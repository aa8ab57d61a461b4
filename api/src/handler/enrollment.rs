use crate::{
    extractor::AuthorizedUser,
    model::enrollment::{
        EnrollmentResponse, UpsertEnrollmentRequest, UpsertEnrollmentRequestWithUserId,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_enrollment(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EnrollmentResponse>> {
    registry
        .enrollment_repository()
        .find_by_user_id(user.id())
        .await
        .and_then(|enrollment| match enrollment {
            Some(enrollment) => Ok(Json(enrollment.into())),
            None => Err(AppError::EntityNotFound(
                "参加登録が見つかりませんでした。".into(),
            )),
        })
}

pub async fn upsert_enrollment(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpsertEnrollmentRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let upsert = UpsertEnrollmentRequestWithUserId::new(user.id(), req);
    registry
        .enrollment_repository()
        .upsert(upsert.into())
        .await
        .map(|_| StatusCode::OK)
}
