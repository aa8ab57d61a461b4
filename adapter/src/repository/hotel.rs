use crate::database::{
    model::{hotel::HotelRow, room::RoomRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    hotel::{Hotel, HotelWithRooms},
    id::HotelId,
    room::Room,
};
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        let rows = sqlx::query_as::<_, HotelRow>(
            r#"
                SELECT hotel_id, name, image
                FROM hotels
                ORDER BY hotel_id
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_with_rooms(&self, hotel_id: HotelId) -> AppResult<Option<HotelWithRooms>> {
        let hotel = sqlx::query_as::<_, HotelRow>(
            r#"
                SELECT hotel_id, name, image
                FROM hotels
                WHERE hotel_id = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT room_id, hotel_id, name, capacity
                FROM rooms
                WHERE hotel_id = $1
                ORDER BY room_id
            "#,
        )
        .bind(hotel_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Some(HotelWithRooms {
            hotel: Hotel::from(hotel),
            rooms: rooms.into_iter().map(Room::from).collect(),
        }))
    }
}
