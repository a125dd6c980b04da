use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::connections::requests::CreateConnectionRequest;
use crate::services::ConnectionService;

// 懒加载的全局 CONNECTION_SERVICE 实例
static CONNECTION_SERVICE: Lazy<ConnectionService> = Lazy::new(ConnectionService::new_lazy);

// HTTP处理程序
pub async fn count_connections(req: HttpRequest) -> ActixResult<HttpResponse> {
    CONNECTION_SERVICE.count_connections(&req).await
}

pub async fn create_connection(
    req: HttpRequest,
    connection_data: web::Json<CreateConnectionRequest>,
) -> ActixResult<HttpResponse> {
    CONNECTION_SERVICE
        .create_connection(&req, connection_data.into_inner())
        .await
}

// 配置路由
pub fn configure_connections_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/connections").service(
            web::resource("")
                // 查询联系总数
                .route(web::get().to(count_connections))
                // 记录一次联系
                .route(web::post().to(create_connection)),
        ),
    );
}
