use crate::model::{id::BookingId, room::Room};

pub mod event;

#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub room: Room,
}
