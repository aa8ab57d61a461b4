use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // ユーザー ID に紐づく現在の予約を取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>>;
    // 予約操作を行う
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // 予約の部屋を変更する
    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<BookingId>;
}
