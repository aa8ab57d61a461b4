use crate::{
    extractor::AuthorizedUser,
    model::payment::{
        PaymentQuery, PaymentResponse, ProcessPaymentRequest, ProcessPaymentRequestWithUserId,
    },
};
use axum::{
    extract::{Query, State},
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_payment(
    user: AuthorizedUser,
    Query(query): Query<PaymentQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaymentResponse>> {
    registry
        .payment_repository()
        .find_by_ticket_id(query.ticket_id, user.id())
        .await
        .and_then(|payment| match payment {
            Some(payment) => Ok(Json(payment.into())),
            None => Err(AppError::EntityNotFound(
                "支払い情報が見つかりませんでした。".into(),
            )),
        })
}

pub async fn process_payment(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<ProcessPaymentRequest>,
) -> AppResult<Json<PaymentResponse>> {
    req.validate(&())?;

    let process = ProcessPaymentRequestWithUserId::new(user.id(), req);
    registry
        .payment_repository()
        .process(process.into())
        .await
        .map(PaymentResponse::from)
        .map(Json)
}
