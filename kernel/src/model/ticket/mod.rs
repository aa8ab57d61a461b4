use crate::model::{
    id::{EnrollmentId, TicketId},
    ticket_type::TicketType,
};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

#[derive(Debug)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

impl Ticket {
    // ホテルを利用できるのは支払い済み・現地参加・ホテル付き券種のチケットのみ
    pub fn grants_hotel_access(&self) -> bool {
        self.status == TicketStatus::Paid
            && !self.ticket_type.is_remote
            && self.ticket_type.includes_hotel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::TicketTypeId;

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        Ticket {
            ticket_id: TicketId::new(1),
            enrollment_id: EnrollmentId::new(1),
            status,
            ticket_type: TicketType {
                ticket_type_id: TicketTypeId::new(1),
                name: "Test".into(),
                price: 25000,
                is_remote,
                includes_hotel,
            },
        }
    }

    #[test]
    fn paid_in_person_ticket_with_hotel_grants_access() {
        assert!(ticket(TicketStatus::Paid, false, true).grants_hotel_access());
    }

    #[test]
    fn reserved_ticket_does_not_grant_access() {
        assert!(!ticket(TicketStatus::Reserved, false, true).grants_hotel_access());
    }

    #[test]
    fn remote_ticket_does_not_grant_access() {
        assert!(!ticket(TicketStatus::Paid, true, true).grants_hotel_access());
    }

    #[test]
    fn ticket_without_hotel_does_not_grant_access() {
        assert!(!ticket(TicketStatus::Paid, false, false).grants_hotel_access());
    }
}
