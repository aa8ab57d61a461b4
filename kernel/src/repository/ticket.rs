use crate::model::{
    id::UserId,
    ticket::{event::CreateTicket, Ticket},
    ticket_type::TicketType,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn find_types(&self) -> AppResult<Vec<TicketType>>;
    // ユーザー ID に紐づくチケットを取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Ticket>>;
    async fn create(&self, event: CreateTicket) -> AppResult<Ticket>;
}
