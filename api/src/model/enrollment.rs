use derive_new::new;
use garde::Validate;
use kernel::model::{
    enrollment::{event::UpsertEnrollment, Enrollment},
    id::{EnrollmentId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertEnrollmentRequest {
    #[garde(length(min = 1))]
    name: String,
    #[garde(length(min = 1))]
    document: String,
    #[garde(length(min = 1))]
    phone: String,
}

#[derive(new)]
pub struct UpsertEnrollmentRequestWithUserId(UserId, UpsertEnrollmentRequest);

impl From<UpsertEnrollmentRequestWithUserId> for UpsertEnrollment {
    fn from(value: UpsertEnrollmentRequestWithUserId) -> Self {
        let UpsertEnrollmentRequestWithUserId(
            user_id,
            UpsertEnrollmentRequest {
                name,
                document,
                phone,
            },
        ) = value;
        UpsertEnrollment {
            user_id,
            name,
            document,
            phone,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResponse {
    pub id: EnrollmentId,
    pub name: String,
    pub document: String,
    pub phone: String,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(value: Enrollment) -> Self {
        let Enrollment {
            enrollment_id,
            user_id: _,
            name,
            document,
            phone,
        } = value;
        Self {
            id: enrollment_id,
            name,
            document,
            phone,
        }
    }
}
