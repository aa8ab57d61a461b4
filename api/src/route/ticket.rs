use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::ticket::{register_ticket, show_ticket, show_ticket_types};

pub fn build_ticket_routers() -> Router<AppRegistry> {
    let ticket_routers = Router::new()
        .route("/", get(show_ticket))
        .route("/", post(register_ticket))
        .route("/types", get(show_ticket_types));

    Router::new().nest("/tickets", ticket_routers)
}
