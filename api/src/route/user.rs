use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::user::register_user;

pub fn build_user_router() -> Router<AppRegistry> {
    let user_routers = Router::new().route("/", post(register_user));

    Router::new().nest("/users", user_routers)
}
