use kernel::model::{
    hotel::{Hotel, HotelWithRooms},
    id::{HotelId, RoomId},
    room::Room,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelsResponse {
    pub items: Vec<HotelResponse>,
}

impl From<Vec<Hotel>> for HotelsResponse {
    fn from(value: Vec<Hotel>) -> Self {
        Self {
            items: value.into_iter().map(HotelResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
}

impl From<Hotel> for HotelResponse {
    fn from(value: Hotel) -> Self {
        let Hotel {
            hotel_id,
            name,
            image,
        } = value;
        Self {
            id: hotel_id,
            name,
            image,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRoomsResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(value: HotelWithRooms) -> Self {
        let HotelWithRooms { hotel, rooms } = value;
        Self {
            id: hotel.hotel_id,
            name: hotel.name,
            image: hotel.image,
            rooms: rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_id,
            hotel_id,
            name,
            capacity,
        } = value;
        Self {
            id: room_id,
            hotel_id,
            name,
            capacity,
        }
    }
}
