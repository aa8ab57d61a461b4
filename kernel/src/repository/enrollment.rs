use crate::model::{
    enrollment::{event::UpsertEnrollment, Enrollment},
    id::{EnrollmentId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn upsert(&self, event: UpsertEnrollment) -> AppResult<EnrollmentId>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>>;
}
