use kernel::model::{
    id::{HotelId, RoomId},
    room::{Room, RoomOccupancy},
};

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            hotel_id,
            name,
            capacity,
        } = value;
        Room {
            room_id,
            hotel_id,
            name,
            capacity,
        }
    }
}

// 空室確認用に予約数も一緒に取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct RoomOccupancyRow {
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
    pub booked: i64,
}

impl From<RoomOccupancyRow> for RoomOccupancy {
    fn from(value: RoomOccupancyRow) -> Self {
        let RoomOccupancyRow {
            room_id,
            hotel_id,
            name,
            capacity,
            booked,
        } = value;
        RoomOccupancy {
            room: Room {
                room_id,
                hotel_id,
                name,
                capacity,
            },
            booked,
        }
    }
}
