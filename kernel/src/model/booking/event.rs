use crate::model::id::{BookingId, RoomId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateBooking {
    pub user_id: UserId,
    pub room_id: RoomId,
}

#[derive(new)]
pub struct UpdateBookingRoom {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub requested_user: UserId,
}
