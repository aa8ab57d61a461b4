use crate::{
    extractor::AuthorizedUser,
    model::hotel::{HotelWithRoomsResponse, HotelsResponse},
};
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::{HotelId, UserId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// ホテル情報は有効なチケットを持つユーザーにのみ公開する
async fn ensure_hotel_access(registry: &AppRegistry, user_id: UserId) -> AppResult<()> {
    let ticket = registry.ticket_repository().find_by_user_id(user_id).await?;
    match ticket {
        Some(ticket) if ticket.grants_hotel_access() => Ok(()),
        _ => Err(AppError::ForbiddenOperation(format!(
            "ユーザー（{}）はホテルを利用できる有効なチケットを持っていません。",
            user_id
        ))),
    }
}

pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelsResponse>> {
    ensure_hotel_access(&registry, user.id()).await?;

    registry
        .hotel_repository()
        .find_all()
        .await
        .map(HotelsResponse::from)
        .map(Json)
}

pub async fn show_hotel(
    user: AuthorizedUser,
    Path(hotel_id): Path<HotelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelWithRoomsResponse>> {
    ensure_hotel_access(&registry, user.id()).await?;

    registry
        .hotel_repository()
        .find_with_rooms(hotel_id)
        .await
        .and_then(|hotel| match hotel {
            Some(hotel) => Ok(Json(hotel.into())),
            None => Err(AppError::EntityNotFound(format!(
                "ホテル（{}）が見つかりませんでした。",
                hotel_id
            ))),
        })
}
