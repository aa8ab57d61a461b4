use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingIdResponse, BookingResponse, CreateBookingRequest, CreateBookingRequestWithUserId,
        UpdateBookingRequest, UpdateBookingRequestWithIds,
    },
};
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .find_by_user_id(user.id())
        .await
        .and_then(|booking| match booking {
            Some(booking) => Ok(Json(booking.into())),
            None => Err(AppError::EntityNotFound(
                "予約が見つかりませんでした。".into(),
            )),
        })
}

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<Json<BookingIdResponse>> {
    let create = CreateBookingRequestWithUserId::new(user.id(), req);
    registry
        .booking_repository()
        .create(create.into())
        .await
        .map(BookingIdResponse::from)
        .map(Json)
}

pub async fn update_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingRequest>,
) -> AppResult<Json<BookingIdResponse>> {
    let update = UpdateBookingRequestWithIds::new(booking_id, user.id(), req);
    registry
        .booking_repository()
        .update_room(update.into())
        .await
        .map(BookingIdResponse::from)
        .map(Json)
}
