//! HTTP服务器模块 - 暴露任务优先级与日程生成API

pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use models::*;
pub use routes::{build_app, create_router};
pub use server::*;
pub use state::*;
