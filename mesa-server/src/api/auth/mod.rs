//! Auth API 模块
//!
//! 令牌签发/刷新、注册和个人资料接口。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/token", post(handler::token))
        .route("/token/refresh", post(handler::refresh))
        .route("/register", post(handler::register))
        .route(
            "/user-profile",
            get(handler::profile)
                .put(handler::update_profile)
                .patch(handler::update_profile),
        )
}
