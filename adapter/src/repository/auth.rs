use std::sync::Arc;

use crate::{
    database::ConnectionPool,
    redis::{
        model::{RedisKey, RedisValue},
        RedisClient,
    },
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

pub struct AuthorizationKey(String);

impl AuthorizationKey {
    fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(value: &AccessToken) -> Self {
        Self(value.0.to_string())
    }
}

impl From<AccessToken> for AuthorizationKey {
    fn from(value: AccessToken) -> Self {
        Self(value.0)
    }
}

impl From<AuthorizationKey> for AccessToken {
    fn from(value: AuthorizationKey) -> Self {
        Self(value.0)
    }
}

pub struct AuthorizedUserId(UserId);

impl AuthorizedUserId {
    pub fn into_inner(self) -> UserId {
        self.0
    }
}

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.raw().to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .parse::<UserId>()
            .map(Self)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))
    }
}

#[derive(sqlx::FromRow)]
struct UserItem {
    user_id: UserId,
    password_hash: String,
}

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key: AuthorizationKey = access_token.into();
        self.kv
            .get(&key)
            .await
            .map(|x| x.map(AuthorizedUserId::into_inner))
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let user_item = sqlx::query_as::<_, UserItem>(
            r#"
                SELECT user_id, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or(AppError::UnauthenticatedError)?;

        let valid = bcrypt::verify(password, &user_item.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        Ok(user_item.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let key = AuthorizationKey::generate();
        self.kv
            .set_ex(&key, &AuthorizedUserId(event.user_id), self.ttl)
            .await?;
        Ok(key.into())
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = access_token.into();
        self.kv.delete(&key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::config::RedisConfig;

    #[test]
    fn test_authorized_user_id_conversion() -> anyhow::Result<()> {
        let authorized = AuthorizedUserId::try_from("42".to_string())?;
        assert_eq!(authorized.inner(), "42");
        assert_eq!(authorized.into_inner(), UserId::new(42));

        let res = AuthorizedUserId::try_from("not-a-number".to_string());
        assert!(matches!(res, Err(AppError::ConversionEntityError(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_verify_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let hash = bcrypt::hash("pa55w0rd", bcrypt::DEFAULT_COST)?;
        sqlx::query("INSERT INTO users (user_name, email, password_hash) VALUES ($1, $2, $3)")
            .bind("Test User")
            .bind("test.user@example.com")
            .bind(&hash)
            .execute(&pool)
            .await?;

        let kv = Arc::new(RedisClient::new(&RedisConfig {
            host: "localhost".into(),
            port: 6379,
        })?);
        let repo = AuthRepositoryImpl::new(ConnectionPool::new(pool), kv, 60);

        let user_id = repo.verify_user("test.user@example.com", "pa55w0rd").await?;
        assert!(user_id.raw() > 0);

        let res = repo.verify_user("test.user@example.com", "wrong").await;
        assert!(matches!(res, Err(AppError::UnauthenticatedError)));

        let res = repo.verify_user("nobody@example.com", "pa55w0rd").await;
        assert!(matches!(res, Err(AppError::UnauthenticatedError)));

        Ok(())
    }
}
