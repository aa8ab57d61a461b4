use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::enrollment::{show_enrollment, upsert_enrollment};

pub fn build_enrollment_routers() -> Router<AppRegistry> {
    let enrollment_routers = Router::new()
        .route("/", get(show_enrollment))
        .route("/", post(upsert_enrollment));

    Router::new().nest("/enrollments", enrollment_routers)
}
