use crate::model::id::UserId;
use derive_new::new;

#[derive(new)]
pub struct UpsertEnrollment {
    pub user_id: UserId,
    pub name: String,
    pub document: String,
    pub phone: String,
}
