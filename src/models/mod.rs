pub mod classes;
pub mod common;
pub mod connections;
pub mod users;

pub use common::response::ErrorResponse;

// 记录程序启动时间，用于启动耗时统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
