use serde::{Deserialize, Serialize};

// 联系总数响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionCountResponse {
    pub total: i64,
}
