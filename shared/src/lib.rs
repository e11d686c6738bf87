//! Shared types for the Mesa ordering platform
//!
//! 前后端共享的数据模型和工具函数：
//! - [`models`] - 实体模型和请求/响应载荷
//! - [`util`] - ID 生成和时间戳工具
//!
//! The `db` feature adds sqlx derives to the entity models so the server
//! can map them straight out of SQLite rows; clients build without it.

pub mod models;
pub mod util;
