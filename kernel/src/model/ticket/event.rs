use crate::model::id::{TicketTypeId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateTicket {
    pub user_id: UserId,
    pub ticket_type_id: TicketTypeId,
}
