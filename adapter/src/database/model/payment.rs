use chrono::{DateTime, Utc};
use kernel::model::{
    id::{PaymentId, TicketId, UserId},
    payment::{Payment, PaymentWithOwner},
};

#[derive(sqlx::FromRow)]
pub struct PaymentRow {
    pub payment_id: PaymentId,
    pub ticket_id: TicketId,
    pub amount: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentRow> for Payment {
    fn from(value: PaymentRow) -> Self {
        let PaymentRow {
            payment_id,
            ticket_id,
            amount,
            card_issuer,
            card_last_digits,
            created_at,
        } = value;
        Payment {
            payment_id,
            ticket_id,
            amount,
            card_issuer,
            card_last_digits,
            created_at,
        }
    }
}

// 支払い情報の参照時に所有者チェックを行うための型
#[derive(sqlx::FromRow)]
pub struct PaymentWithOwnerRow {
    pub payment_id: PaymentId,
    pub ticket_id: TicketId,
    pub amount: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
    pub created_at: DateTime<Utc>,
    pub owned_by: UserId,
}

impl From<PaymentWithOwnerRow> for PaymentWithOwner {
    fn from(value: PaymentWithOwnerRow) -> Self {
        let PaymentWithOwnerRow {
            payment_id,
            ticket_id,
            amount,
            card_issuer,
            card_last_digits,
            created_at,
            owned_by,
        } = value;
        PaymentWithOwner {
            payment: Payment {
                payment_id,
                ticket_id,
                amount,
                card_issuer,
                card_last_digits,
                created_at,
            },
            owned_by,
        }
    }
}
