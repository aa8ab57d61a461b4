use crate::model::hotel::RoomResponse;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub room_id: RoomId,
}

#[derive(new)]
pub struct CreateBookingRequestWithUserId(UserId, CreateBookingRequest);

impl From<CreateBookingRequestWithUserId> for CreateBooking {
    fn from(value: CreateBookingRequestWithUserId) -> Self {
        let CreateBookingRequestWithUserId(user_id, CreateBookingRequest { room_id }) = value;
        CreateBooking { user_id, room_id }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub room_id: RoomId,
}

#[derive(new)]
pub struct UpdateBookingRequestWithIds(BookingId, UserId, UpdateBookingRequest);

impl From<UpdateBookingRequestWithIds> for UpdateBookingRoom {
    fn from(value: UpdateBookingRequestWithIds) -> Self {
        let UpdateBookingRequestWithIds(booking_id, user_id, UpdateBookingRequest { room_id }) =
            value;
        UpdateBookingRoom {
            booking_id,
            room_id,
            requested_user: user_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub room: RoomResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking { booking_id, room } = value;
        Self {
            id: booking_id,
            room: room.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: BookingId,
}

impl From<BookingId> for BookingIdResponse {
    fn from(value: BookingId) -> Self {
        Self { booking_id: value }
    }
}
