use crate::model::id::{HotelId, RoomId};

#[derive(Debug)]
pub struct Room {
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
}

#[derive(Debug)]
pub struct RoomOccupancy {
    pub room: Room,
    pub booked: i64,
}

impl RoomOccupancy {
    pub fn has_vacancy(&self) -> bool {
        self.booked < self.room.capacity as i64
    }
}
