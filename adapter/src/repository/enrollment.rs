use crate::database::{model::enrollment::EnrollmentRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    enrollment::{event::UpsertEnrollment, Enrollment},
    id::{EnrollmentId, UserId},
};
use kernel::repository::enrollment::EnrollmentRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct EnrollmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    // 参加登録は 1 ユーザーにつき 1 件なので、既存行があれば更新する
    async fn upsert(&self, event: UpsertEnrollment) -> AppResult<EnrollmentId> {
        let enrollment_id = sqlx::query_scalar::<_, EnrollmentId>(
            r#"
                INSERT INTO enrollments (user_id, name, document, phone)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (user_id)
                DO UPDATE SET
                    name = EXCLUDED.name,
                    document = EXCLUDED.document,
                    phone = EXCLUDED.phone
                RETURNING enrollment_id
            "#,
        )
        .bind(event.user_id)
        .bind(&event.name)
        .bind(&event.document)
        .bind(&event.phone)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(enrollment_id)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
                SELECT enrollment_id, user_id, name, document, phone
                FROM enrollments
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Enrollment::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations", fixtures("common"))]
    async fn test_upsert_enrollment(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool));
        let user_id = UserId::new(6);

        let before = repo.find_by_user_id(user_id).await?;
        assert!(before.is_none());

        let first = repo
            .upsert(UpsertEnrollment::new(
                user_id,
                "Frank Field".into(),
                "39065381003".into(),
                "(21) 98765-4321".into(),
            ))
            .await?;

        let enrollment = repo.find_by_user_id(user_id).await?;
        let enrollment = enrollment.ok_or_else(|| anyhow::anyhow!("enrollment not found"))?;
        assert_eq!(enrollment.enrollment_id, first);
        assert_eq!(enrollment.name, "Frank Field");

        // 同じユーザーで再登録しても行は増えず、内容だけが更新される
        let second = repo
            .upsert(UpsertEnrollment::new(
                user_id,
                "Frank Field Jr".into(),
                "39065381003".into(),
                "(21) 91234-5678".into(),
            ))
            .await?;
        assert_eq!(first, second);

        let enrollment = repo.find_by_user_id(user_id).await?;
        let enrollment = enrollment.ok_or_else(|| anyhow::anyhow!("enrollment not found"))?;
        assert_eq!(enrollment.name, "Frank Field Jr");
        assert_eq!(enrollment.phone, "(21) 91234-5678");

        Ok(())
    }
}
