use crate::database::{
    model::payment::{PaymentRow, PaymentWithOwnerRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{TicketId, UserId},
    payment::{event::ProcessPayment, Payment, PaymentWithOwner},
    ticket::TicketStatus,
};
use kernel::repository::payment::PaymentRepository;
use shared::error::{AppError, AppResult};

// 支払い処理の事前チェックで使う、チケットの所有者と券種価格の組
#[derive(sqlx::FromRow)]
struct TicketOwnerItem {
    owned_by: UserId,
    price: i32,
}

#[derive(new)]
pub struct PaymentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryImpl {
    // チケット ID に紐づく支払い情報を取得する
    // 支払いが存在しても他人のチケットの場合はエラーにする
    async fn find_by_ticket_id(
        &self,
        ticket_id: TicketId,
        requested_user: UserId,
    ) -> AppResult<Option<Payment>> {
        let row = sqlx::query_as::<_, PaymentWithOwnerRow>(
            r#"
                SELECT
                    p.payment_id,
                    p.ticket_id,
                    p.amount,
                    p.card_issuer,
                    p.card_last_digits,
                    p.created_at,
                    e.user_id AS owned_by
                FROM payments AS p
                INNER JOIN tickets AS t ON p.ticket_id = t.ticket_id
                INNER JOIN enrollments AS e ON t.enrollment_id = e.enrollment_id
                WHERE p.ticket_id = $1
                ORDER BY p.payment_id
                LIMIT 1
            "#,
        )
        .bind(ticket_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(found) = row.map(PaymentWithOwner::from) else {
            return Ok(None);
        };

        if found.owned_by != requested_user {
            return Err(AppError::UnauthorizedError);
        }

        Ok(Some(found.payment))
    }

    // 支払いを確定しチケットを PAID にする
    async fn process(&self, event: ProcessPayment) -> AppResult<Payment> {
        let mut tx = self.db.begin().await?;

        // ① チケットの存在と所有者の確認
        let ticket = sqlx::query_as::<_, TicketOwnerItem>(
            r#"
                SELECT e.user_id AS owned_by, tt.price
                FROM tickets AS t
                INNER JOIN enrollments AS e ON t.enrollment_id = e.enrollment_id
                INNER JOIN ticket_types AS tt ON t.ticket_type_id = tt.ticket_type_id
                WHERE t.ticket_id = $1
            "#,
        )
        .bind(event.ticket_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "チケット（{}）が見つかりませんでした。",
                event.ticket_id
            ))
        })?;

        if ticket.owned_by != event.requested_user {
            return Err(AppError::UnauthorizedError);
        }

        // ② チケットを支払い済みにする
        let res = sqlx::query(
            r#"
                UPDATE tickets
                SET status = $1
                WHERE ticket_id = $2
            "#,
        )
        .bind(TicketStatus::Paid)
        .bind(event.ticket_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No ticket has been marked as paid".into(),
            ));
        }

        // ③ 支払いレコードを作成する
        // カード情報は発行会社と下 4 桁のみ保存する
        let row = sqlx::query_as::<_, PaymentRow>(
            r#"
                INSERT INTO payments (ticket_id, amount, card_issuer, card_last_digits)
                VALUES ($1, $2, $3, $4)
                RETURNING payment_id, ticket_id, amount, card_issuer, card_last_digits, created_at
            "#,
        )
        .bind(event.ticket_id)
        .bind(ticket.price)
        .bind(&event.card_issuer)
        .bind(&event.card_last_digits)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Payment::from(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::ticket::TicketRepositoryImpl;
    use kernel::repository::ticket::TicketRepository;

    #[sqlx::test(migrations = "../migrations", fixtures("common", "tickets"))]
    async fn test_process_payment(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let ticket_repo = TicketRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let repo = PaymentRepositoryImpl::new(ConnectionPool::new(pool));

        // ユーザー 2 は RESERVED のチケット（ID=2、券種は Presential + Hotel）を持つ
        let payment = repo
            .process(ProcessPayment::new(
                TicketId::new(2),
                UserId::new(2),
                "VISA".into(),
                "4242".into(),
            ))
            .await?;
        assert_eq!(payment.amount, 60000);
        assert_eq!(payment.card_issuer, "VISA");
        assert_eq!(payment.card_last_digits, "4242");

        // チケットが PAID に変わっている
        let ticket = ticket_repo.find_by_user_id(UserId::new(2)).await?;
        let ticket = ticket.ok_or_else(|| anyhow::anyhow!("ticket not found"))?;
        assert_eq!(ticket.status, TicketStatus::Paid);

        // 支払い情報も読み出せる
        let found = repo
            .find_by_ticket_id(TicketId::new(2), UserId::new(2))
            .await?;
        let found = found.ok_or_else(|| anyhow::anyhow!("payment not found"))?;
        assert_eq!(found.payment_id, payment.payment_id);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations", fixtures("common", "tickets"))]
    async fn test_process_payment_with_unknown_ticket(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PaymentRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo
            .process(ProcessPayment::new(
                TicketId::new(999),
                UserId::new(2),
                "VISA".into(),
                "4242".into(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }

    // 他人のチケットに対する支払い操作は拒否される
    #[sqlx::test(migrations = "../migrations", fixtures("common", "tickets"))]
    async fn test_process_payment_for_foreign_ticket(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PaymentRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let res = repo
            .process(ProcessPayment::new(
                TicketId::new(2),
                UserId::new(1),
                "VISA".into(),
                "4242".into(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::UnauthorizedError)));

        // 拒否された場合はチケットの状態も変わらない
        let status = sqlx::query_scalar::<_, TicketStatus>(
            "SELECT status FROM tickets WHERE ticket_id = $1",
        )
        .bind(TicketId::new(2))
        .fetch_one(&pool)
        .await?;
        assert_eq!(status, TicketStatus::Reserved);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations", fixtures("common", "tickets"))]
    async fn test_find_payment_before_processing(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PaymentRepositoryImpl::new(ConnectionPool::new(pool));

        // チケットは存在するがまだ支払いがない
        let found = repo
            .find_by_ticket_id(TicketId::new(2), UserId::new(2))
            .await?;
        assert!(found.is_none());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations", fixtures("common", "tickets"))]
    async fn test_find_payment_for_foreign_ticket(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PaymentRepositoryImpl::new(ConnectionPool::new(pool));

        repo.process(ProcessPayment::new(
            TicketId::new(2),
            UserId::new(2),
            "VISA".into(),
            "4242".into(),
        ))
        .await?;

        let res = repo.find_by_ticket_id(TicketId::new(2), UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::UnauthorizedError)));

        Ok(())
    }
}
