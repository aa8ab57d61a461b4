use crate::database::{
    model::ticket::{TicketRow, TicketTypeRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{EnrollmentId, UserId},
    ticket::{event::CreateTicket, Ticket, TicketStatus},
    ticket_type::TicketType,
};
use kernel::repository::ticket::TicketRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn find_types(&self) -> AppResult<Vec<TicketType>> {
        let rows = sqlx::query_as::<_, TicketTypeRow>(
            r#"
                SELECT ticket_type_id, name, price, is_remote, includes_hotel
                FROM ticket_types
                ORDER BY ticket_type_id
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(TicketType::from).collect())
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Ticket>> {
        let row = sqlx::query_as::<_, TicketRow>(
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
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Ticket::from))
    }

    // チケット購入操作を行う
    async fn create(&self, event: CreateTicket) -> AppResult<Ticket> {
        let mut tx = self.db.begin().await?;

        // ① ユーザーの参加登録を確認する
        let enrollment_id = sqlx::query_scalar::<_, EnrollmentId>(
            r#"
                SELECT enrollment_id
                FROM enrollments
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "ユーザー（{}）の参加登録が見つかりませんでした。",
                event.user_id
            ))
        })?;

        // ② 券種の存在確認
        let ticket_type = sqlx::query_as::<_, TicketTypeRow>(
            r#"
                SELECT ticket_type_id, name, price, is_remote, includes_hotel
                FROM ticket_types
                WHERE ticket_type_id = $1
            "#,
        )
        .bind(event.ticket_type_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "券種（{}）が見つかりませんでした。",
                event.ticket_type_id
            ))
        })?;

        // ③ RESERVED 状態のチケットを作成する
        let ticket_id = sqlx::query_scalar(
            r#"
                INSERT INTO tickets (enrollment_id, ticket_type_id, status)
                VALUES ($1, $2, $3)
                RETURNING ticket_id
            "#,
        )
        .bind(enrollment_id)
        .bind(event.ticket_type_id)
        .bind(TicketStatus::Reserved)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Ticket {
            ticket_id,
            enrollment_id,
            status: TicketStatus::Reserved,
            ticket_type: TicketType::from(ticket_type),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::TicketTypeId;

    #[sqlx::test(migrations = "../migrations", fixtures("common"))]
    async fn test_find_ticket_types(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = TicketRepositoryImpl::new(ConnectionPool::new(pool));

        let types = repo.find_types().await?;
        assert_eq!(types.len(), 3);
        assert_eq!(types[0].name, "Presential + Hotel");
        assert!(!types[0].is_remote);
        assert!(types[0].includes_hotel);
        assert_eq!(types[2].name, "Remote");
        assert!(types[2].is_remote);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations", fixtures("common", "tickets"))]
    async fn test_find_ticket_by_user_id(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = TicketRepositoryImpl::new(ConnectionPool::new(pool));

        // 支払い済みチケットを持つユーザー
        let ticket = repo.find_by_user_id(UserId::new(1)).await?;
        let ticket = ticket.ok_or_else(|| anyhow::anyhow!("ticket not found"))?;
        assert_eq!(ticket.status, TicketStatus::Paid);
        assert!(ticket.grants_hotel_access());

        // 参加登録のみでチケット未購入のユーザー
        let ticket = repo.find_by_user_id(UserId::new(5)).await?;
        assert!(ticket.is_none());

        // 参加登録していないユーザー
        let ticket = repo.find_by_user_id(UserId::new(6)).await?;
        assert!(ticket.is_none());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations", fixtures("common"))]
    async fn test_create_ticket(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = TicketRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateTicket::new(UserId::new(5), TicketTypeId::new(2)))
            .await?;
        assert_eq!(created.status, TicketStatus::Reserved);
        assert_eq!(created.ticket_type.name, "Presential Only");

        let found = repo.find_by_user_id(UserId::new(5)).await?;
        let found = found.ok_or_else(|| anyhow::anyhow!("ticket not found"))?;
        assert_eq!(found.ticket_id, created.ticket_id);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations", fixtures("common"))]
    async fn test_create_ticket_requires_enrollment(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = TicketRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo
            .create(CreateTicket::new(UserId::new(6), TicketTypeId::new(1)))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations", fixtures("common"))]
    async fn test_create_ticket_requires_known_type(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = TicketRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo
            .create(CreateTicket::new(UserId::new(5), TicketTypeId::new(999)))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }
}
