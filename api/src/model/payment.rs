use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{PaymentId, TicketId, UserId},
    payment::{event::ProcessPayment, Payment},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQuery {
    pub ticket_id: TicketId,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequest {
    #[garde(skip)]
    pub ticket_id: TicketId,
    #[garde(dive)]
    pub card_data: CardDataRequest,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CardDataRequest {
    #[garde(length(min = 1))]
    pub issuer: String,
    // 16 桁のカード番号のみ受け付ける
    #[garde(range(min = 1_000_000_000_000_000, max = 9_999_999_999_999_999))]
    pub number: i64,
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub expiration_date: String,
    #[garde(range(min = 100, max = 999))]
    pub cvv: i32,
}

#[derive(new)]
pub struct ProcessPaymentRequestWithUserId(UserId, ProcessPaymentRequest);

impl From<ProcessPaymentRequestWithUserId> for ProcessPayment {
    fn from(value: ProcessPaymentRequestWithUserId) -> Self {
        let ProcessPaymentRequestWithUserId(
            user_id,
            ProcessPaymentRequest {
                ticket_id,
                card_data,
            },
        ) = value;
        // カード番号そのものは保持せず、下 4 桁だけを残す
        ProcessPayment {
            ticket_id,
            requested_user: user_id,
            card_issuer: card_data.issuer,
            card_last_digits: format!("{:04}", card_data.number % 10_000),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: PaymentId,
    pub ticket_id: TicketId,
    pub amount: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(value: Payment) -> Self {
        let Payment {
            payment_id,
            ticket_id,
            amount,
            card_issuer,
            card_last_digits,
            created_at,
        } = value;
        Self {
            id: payment_id,
            ticket_id,
            amount,
            card_issuer,
            card_last_digits,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_last_digits_keeps_leading_zeros() {
        let req = ProcessPaymentRequestWithUserId::new(
            UserId::new(1),
            ProcessPaymentRequest {
                ticket_id: TicketId::new(1),
                card_data: CardDataRequest {
                    issuer: "VISA".into(),
                    number: 4_242_424_242_420_042,
                    name: "ALICE ARNOLD".into(),
                    expiration_date: "2030-01-01".into(),
                    cvv: 123,
                },
            },
        );

        let event = ProcessPayment::from(req);
        assert_eq!(event.card_last_digits, "0042");
    }

    #[test]
    fn test_card_number_must_have_sixteen_digits() {
        let card = CardDataRequest {
            issuer: "VISA".into(),
            number: 1234,
            name: "ALICE ARNOLD".into(),
            expiration_date: "2030-01-01".into(),
            cvv: 123,
        };
        assert!(card.validate(&()).is_err());
    }
}
