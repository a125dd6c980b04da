//! 请求参数解析错误处理器
//!
//! 保证 JSON 体或查询字符串解析失败时也返回统一的 `{"error": ...}` 响应体。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::ErrorResponse;

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    debug!("JSON payload rejected: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!(
        "Invalid JSON body: {err}"
    )));
    InternalError::from_response(err, response).into()
}

/// 查询字符串解析错误处理器
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    debug!("Query string rejected: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!(
        "Invalid query parameters: {err}"
    )));
    InternalError::from_response(err, response).into()
}
