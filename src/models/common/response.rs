use serde::{Deserialize, Serialize};

// 统一的错误响应结构
//
// 成功响应没有统一包装：search 直接返回匹配数组，写操作返回空体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
