use crate::model::{id::HotelId, room::Room};

#[derive(Debug)]
pub struct Hotel {
    pub hotel_id: HotelId,
    pub name: String,
    pub image: String,
}

#[derive(Debug)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}
