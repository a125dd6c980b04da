use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::classes::requests::{CreateClassRequest, SearchClassesQuery};
use crate::services::ClassService;

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn search_classes(
    req: HttpRequest,
    query: web::Query<SearchClassesQuery>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.search_classes(&req, query.into_inner()).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes").service(
            web::resource("")
                // 按 (星期, 学科, 时刻) 检索可用课程
                .route(web::get().to(search_classes))
                // 注册教师档案 + 课程 + 每周时间表
                .route(web::post().to(create_class)),
        ),
    );
}
