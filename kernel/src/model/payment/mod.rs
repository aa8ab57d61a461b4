use crate::model::id::{PaymentId, TicketId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub ticket_id: TicketId,
    pub amount: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct PaymentWithOwner {
    pub payment: Payment,
    pub owned_by: UserId,
}
