use crate::database::{
    model::{booking::BookingRow, room::RoomOccupancyRow, ticket::TicketRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
    room::RoomOccupancy,
    ticket::Ticket,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    // ユーザー ID に紐づく現在の予約を取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                    b.booking_id,
                    r.room_id,
                    r.hotel_id,
                    r.name AS room_name,
                    r.capacity
                FROM bookings AS b
                INNER JOIN rooms AS r ON b.room_id = r.room_id
                WHERE b.user_id = $1
                ORDER BY b.booking_id
                LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }

    // 予約操作を行う
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        // 事前のチェックとして、以下を順に調べる。
        // - ユーザーが既に予約を持っていないか
        // - ホテルを利用できる有効なチケットを持っているか
        // - 指定の部屋が存在し、空きがあるか
        //
        // すべて通過した場合のみ、このブロック以降の処理に進む
        {
            //
            // ① 同一ユーザーの二重予約ではないか確認
            //
            let existing = self.find_active_booking(&mut tx, event.user_id).await?;
            if existing.is_some() {
                return Err(AppError::ForbiddenOperation(format!(
                    "ユーザー（{}）は既に予約済みです。",
                    event.user_id
                )));
            }

            //
            // ② チケット条件（支払い済み・現地参加・ホテル付き）の確認
            //
            self.ensure_valid_ticket(&mut tx, event.user_id).await?;

            //
            // ③ 部屋の存在確認 ＋ ④ 空室確認
            //
            self.ensure_room_vacancy(&mut tx, event.room_id).await?;
        }

        // 予約処理を行う、すなわち bookings テーブルにレコードを追加する
        let booking_id = sqlx::query_scalar::<_, BookingId>(
            r#"
                INSERT INTO bookings (user_id, room_id)
                VALUES ($1, $2)
                RETURNING booking_id
            "#,
        )
        .bind(event.user_id)
        .bind(event.room_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    // 予約の部屋を変更する
    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        {
            //
            // ① チケット条件の確認
            //
            self.ensure_valid_ticket(&mut tx, event.requested_user).await?;

            //
            // ② 部屋の存在確認 ＋ ③ 空室確認
            //    移動先が現在の部屋でも自身の占有分は除外しない
            //
            self.ensure_room_vacancy(&mut tx, event.room_id).await?;

            //
            // ④ ユーザーが予約を持っているか確認
            //
            let existing = self
                .find_active_booking(&mut tx, event.requested_user)
                .await?;
            if existing.is_none() {
                return Err(AppError::ForbiddenOperation(format!(
                    "ユーザー（{}）は予約を持っていません。",
                    event.requested_user
                )));
            }
        }

        // 指定された予約 ID のレコードの部屋を差し替える
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET room_id = $1
                WHERE booking_id = $2
            "#,
        )
        .bind(event.room_id)
        .bind(event.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "予約（{}）が見つかりませんでした。",
                event.booking_id
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(event.booking_id)
    }
}

impl BookingRepositoryImpl {
    // create, update_room メソッドでのトランザクションを利用するにあたり
    // トランザクション分離レベルを SERIALIZABLE にするために
    // 内部的に使うメソッド
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    // ユーザーの既存予約の ID を取得する
    async fn find_active_booking(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: UserId,
    ) -> AppResult<Option<BookingId>> {
        sqlx::query_scalar::<_, BookingId>(
            r#"
                SELECT booking_id
                FROM bookings
                WHERE user_id = $1
                ORDER BY booking_id
                LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)
    }

    // ユーザーがホテルを利用できる有効なチケットを持っているか確認する
    async fn ensure_valid_ticket(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: UserId,
    ) -> AppResult<()> {
        let ticket = sqlx::query_as::<_, TicketRow>(
            r#"
                SELECT
                    t.ticket_id,
                    t.enrollment_id,
                    t.status,
                    tt.ticket_type_id,
                    tt.name AS ticket_type_name,
                    tt.price,
                    tt.is_remote,
                    tt.includes_hotel
                FROM tickets AS t
                INNER JOIN enrollments AS e ON t.enrollment_id = e.enrollment_id
                INNER JOIN ticket_types AS tt ON t.ticket_type_id = tt.ticket_type_id
                WHERE e.user_id = $1
                ORDER BY t.ticket_id
                LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Ticket::from);

        match ticket {
            Some(ticket) if ticket.grants_hotel_access() => Ok(()),
            _ => Err(AppError::ForbiddenOperation(format!(
                "ユーザー（{}）はホテルを利用できる有効なチケットを持っていません。",
                user_id
            ))),
        }
    }

    // 部屋の存在と空室を確認する
    // 部屋が存在しない場合と満室の場合はエラーの種類を分ける
    async fn ensure_room_vacancy(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        room_id: RoomId,
    ) -> AppResult<()> {
        let occupancy = sqlx::query_as::<_, RoomOccupancyRow>(
            r#"
                SELECT
                    r.room_id,
                    r.hotel_id,
                    r.name,
                    r.capacity,
                    (SELECT COUNT(*) FROM bookings AS b WHERE b.room_id = r.room_id) AS booked
                FROM rooms AS r
                WHERE r.room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(RoomOccupancy::from);

        let occupancy = match occupancy {
            None => {
                return Err(AppError::EntityNotFound(format!(
                    "部屋（{}）が見つかりませんでした。",
                    room_id
                )))
            }
            Some(o) => o,
        };

        if !occupancy.has_vacancy() {
            return Err(AppError::ForbiddenOperation(format!(
                "部屋（{}）には空きがありません。",
                room_id
            )));
        }

        Ok(())
    }
}
