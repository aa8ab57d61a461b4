use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::UserId, user::event::CreateUser, user::User};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let hashed_password = hash_password(&event.password)?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (user_name, email, password_hash)
                VALUES ($1, $2, $3)
                RETURNING user_id, user_name, email
            "#,
        )
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(&hashed_password)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| {
            // メールアドレスの一意制約違反は登録のやり直しを促すエラーにする
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::UnprocessableEntity(format!(
                        "メールアドレス（{}）は既に登録されています。",
                        event.email
                    ));
                }
            }
            AppError::SpecificOperationError(e)
        })?;

        Ok(User::from(row))
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, user_name, email
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }
}

fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_register_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let registered = repo
            .create(CreateUser::new(
                "Test User".into(),
                "test.user@example.com".into(),
                "pa55w0rd".into(),
            ))
            .await?;
        assert_eq!(registered.user_name, "Test User");
        assert_eq!(registered.email, "test.user@example.com");

        let found = repo.find_current_user(registered.user_id).await?;
        assert_eq!(found, Some(registered));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_register_user_with_taken_email(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateUser::new(
            "Test User".into(),
            "test.user@example.com".into(),
            "pa55w0rd".into(),
        ))
        .await?;

        let res = repo
            .create(CreateUser::new(
                "Second User".into(),
                "test.user@example.com".into(),
                "pa55w0rd".into(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_find_unknown_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let found = repo.find_current_user(UserId::new(4096)).await?;
        assert!(found.is_none());

        Ok(())
    }
}
