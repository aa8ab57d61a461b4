use kernel::model::{
    enrollment::Enrollment,
    id::{EnrollmentId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct EnrollmentRow {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub document: String,
    pub phone: String,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(value: EnrollmentRow) -> Self {
        let EnrollmentRow {
            enrollment_id,
            user_id,
            name,
            document,
            phone,
        } = value;
        Enrollment {
            enrollment_id,
            user_id,
            name,
            document,
            phone,
        }
    }
}
