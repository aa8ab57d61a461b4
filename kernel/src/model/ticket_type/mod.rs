use crate::model::id::TicketTypeId;

#[derive(Debug, Clone)]
pub struct TicketType {
    pub ticket_type_id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}
