use crate::model::{
    id::{TicketId, UserId},
    payment::{event::ProcessPayment, Payment},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    // チケット ID に紐づく支払い情報を取得する
    async fn find_by_ticket_id(
        &self,
        ticket_id: TicketId,
        requested_user: UserId,
    ) -> AppResult<Option<Payment>>;
    // 支払いを確定しチケットを PAID にする
    async fn process(&self, event: ProcessPayment) -> AppResult<Payment>;
}
