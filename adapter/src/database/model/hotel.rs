use kernel::model::{hotel::Hotel, id::HotelId};

#[derive(sqlx::FromRow)]
pub struct HotelRow {
    pub hotel_id: HotelId,
    pub name: String,
    pub image: String,
}

impl From<HotelRow> for Hotel {
    fn from(value: HotelRow) -> Self {
        let HotelRow {
            hotel_id,
            name,
            image,
        } = value;
        Hotel {
            hotel_id,
            name,
            image,
        }
    }
}
