use crate::{
    extractor::AuthorizedUser,
    model::ticket::{
        CreateTicketRequest, CreateTicketRequestWithUserId, TicketResponse, TicketTypesResponse,
    },
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_ticket_types(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TicketTypesResponse>> {
    registry
        .ticket_repository()
        .find_types()
        .await
        .map(TicketTypesResponse::from)
        .map(Json)
}

pub async fn show_ticket(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TicketResponse>> {
    registry
        .ticket_repository()
        .find_by_user_id(user.id())
        .await
        .and_then(|ticket| match ticket {
            Some(ticket) => Ok(Json(ticket.into())),
            None => Err(AppError::EntityNotFound(
                "チケットが見つかりませんでした。".into(),
            )),
        })
}

pub async fn register_ticket(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateTicketRequest>,
) -> AppResult<impl IntoResponse> {
    let create = CreateTicketRequestWithUserId::new(user.id(), req);
    registry
        .ticket_repository()
        .create(create.into())
        .await
        .map(|ticket| (StatusCode::CREATED, Json(TicketResponse::from(ticket))))
}
