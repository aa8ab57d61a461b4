use derive_new::new;
use kernel::model::{
    id::{TicketId, TicketTypeId, UserId},
    ticket::{event::CreateTicket, Ticket, TicketStatus},
    ticket_type::TicketType,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatusName {
    Reserved,
    Paid,
}

impl From<TicketStatus> for TicketStatusName {
    fn from(value: TicketStatus) -> Self {
        match value {
            TicketStatus::Reserved => Self::Reserved,
            TicketStatus::Paid => Self::Paid,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypesResponse {
    pub items: Vec<TicketTypeResponse>,
}

impl From<Vec<TicketType>> for TicketTypesResponse {
    fn from(value: Vec<TicketType>) -> Self {
        Self {
            items: value.into_iter().map(TicketTypeResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeResponse {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl From<TicketType> for TicketTypeResponse {
    fn from(value: TicketType) -> Self {
        let TicketType {
            ticket_type_id,
            name,
            price,
            is_remote,
            includes_hotel,
        } = value;
        Self {
            id: ticket_type_id,
            name,
            price,
            is_remote,
            includes_hotel,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub ticket_type_id: TicketTypeId,
}

#[derive(new)]
pub struct CreateTicketRequestWithUserId(UserId, CreateTicketRequest);

impl From<CreateTicketRequestWithUserId> for CreateTicket {
    fn from(value: CreateTicketRequestWithUserId) -> Self {
        let CreateTicketRequestWithUserId(user_id, CreateTicketRequest { ticket_type_id }) = value;
        CreateTicket {
            user_id,
            ticket_type_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: TicketId,
    pub status: TicketStatusName,
    pub ticket_type: TicketTypeResponse,
}

impl From<Ticket> for TicketResponse {
    fn from(value: Ticket) -> Self {
        let Ticket {
            ticket_id,
            enrollment_id: _,
            status,
            ticket_type,
        } = value;
        Self {
            id: ticket_id,
            status: status.into(),
            ticket_type: ticket_type.into(),
        }
    }
}
