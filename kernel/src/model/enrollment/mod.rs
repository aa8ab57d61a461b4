use crate::model::id::{EnrollmentId, UserId};

pub mod event;

#[derive(Debug)]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub document: String,
    pub phone: String,
}
