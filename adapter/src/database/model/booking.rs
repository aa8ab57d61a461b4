use kernel::model::{
    booking::Booking,
    id::{BookingId, HotelId, RoomId},
    room::Room,
};

// 予約一覧を部屋情報と JOIN した形で取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub room_name: String,
    pub capacity: i32,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            room_id,
            hotel_id,
            room_name,
            capacity,
        } = value;
        Booking {
            booking_id,
            room: Room {
                room_id,
                hotel_id,
                name: room_name,
                capacity,
            },
        }
    }
}
