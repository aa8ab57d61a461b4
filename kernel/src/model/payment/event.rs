use crate::model::id::{TicketId, UserId};
use derive_new::new;

#[derive(new)]
pub struct ProcessPayment {
    pub ticket_id: TicketId,
    pub requested_user: UserId,
    pub card_issuer: String,
    pub card_last_digits: String,
}
