//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 令牌、注册、个人资料接口
//! - [`menu_items`] - 菜单浏览接口
//! - [`categories`] - 分类浏览接口
//! - [`tables`] - 桌台浏览接口
//! - [`cart`] - 购物车接口
//! - [`orders`] - 订单接口 (结账)
//! - [`payments`] - 支付接口
//! - [`restaurants`] - 餐厅管理接口 (admin)
//! - [`users`] - 用户管理接口 (admin)
//! - [`staff_orders`] - 订单管理接口 (staff)

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

pub mod auth;
pub mod cart;
pub mod categories;
pub mod health;
pub mod menu_items;
pub mod orders;
pub mod payments;
pub mod restaurants;
pub mod staff_orders;
pub mod tables;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(menu_items::router())
        .merge(categories::router())
        .merge(tables::router())
        .merge(cart::router())
        .merge(orders::router())
        .merge(payments::router())
        .merge(restaurants::router())
        .merge(users::router())
        .merge(staff_orders::router())
}

/// Build the full service: routes + auth/CORS/compression/logging layers
pub fn build_router(state: ServerState) -> Router {
    build_app()
        // JWT 认证中间件 - require_auth 内部会跳过公共路由
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
