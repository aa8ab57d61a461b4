use super::{
    booking::build_booking_routers, enrollment::build_enrollment_routers,
    hotel::build_hotel_routers, payment::build_payment_routers, ticket::build_ticket_routers,
    user::build_user_router,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_enrollment_routers())
        .merge(build_ticket_routers())
        .merge(build_hotel_routers())
        .merge(build_booking_routers())
        .merge(build_payment_routers())
        .merge(build_user_router());
    Router::new().nest("/api/v1", router)
}
