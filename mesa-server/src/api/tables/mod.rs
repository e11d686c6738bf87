//! Dining Table API 模块 (只读浏览面)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/tables", get(handler::list))
}
