use serde::Deserialize;

// 记录一次联系请求
#[derive(Debug, Deserialize)]
pub struct CreateConnectionRequest {
    pub user_id: i64,
}
