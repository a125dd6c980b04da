use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::ErrorResponse;
use crate::models::classes::requests::{ClassSearchFilters, SearchClassesQuery};
use crate::utils::convert_hour_to_minutes;
use crate::utils::validate::validate_week_day;

pub async fn search_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: SearchClassesQuery,
) -> ActixResult<HttpResponse> {
    // 三个过滤条件必须同时存在且非空，缺失时在访问存储层之前拒绝
    let (week_day_raw, subject, time_raw) = match extract_filters(&query) {
        Some(filters) => filters,
        None => {
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::new("Missing filters to search classes")));
        }
    };

    let week_day = match week_day_raw.parse::<i32>() {
        Ok(week_day) => week_day,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
                "week_day must be an integer between 0 and 6",
            )));
        }
    };
    if let Err(msg) = validate_week_day(week_day) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(msg)));
    }

    let time_minutes = match convert_hour_to_minutes(&time_raw) {
        Ok(minutes) => minutes,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(msg)));
        }
    };

    let storage = service.get_storage(request);

    match storage
        .search_classes(ClassSearchFilters {
            week_day,
            subject,
            time_minutes,
        })
        .await
    {
        Ok(matches) => Ok(HttpResponse::Ok().json(matches)),
        Err(e) => {
            error!("Class search failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Unexpected error while searching classes",
            )))
        }
    }
}

/// 提取并去除空白后的过滤条件，任一缺失或为空即返回 None
fn extract_filters(query: &SearchClassesQuery) -> Option<(String, String, String)> {
    let week_day = non_empty(query.week_day.as_deref())?;
    let subject = non_empty(query.subject.as_deref())?;
    let time = non_empty(query.time.as_deref())?;
    Some((week_day, subject, time))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::requests::{CreateClassRequest, ScheduleItemRequest};
    use crate::models::classes::responses::ClassMatch;
    use crate::services::ClassService;
    use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    fn query(week_day: Option<&str>, subject: Option<&str>, time: Option<&str>) -> SearchClassesQuery {
        SearchClassesQuery {
            week_day: week_day.map(str::to_string),
            subject: subject.map(str::to_string),
            time: time.map(str::to_string),
        }
    }

    // 请求中未注入任何存储实例：过滤条件校验失败必须在访问存储层之前返回
    #[actix_web::test]
    async fn test_missing_filters_rejected_before_storage() {
        let service = ClassService::new_lazy();
        let request = TestRequest::default().to_http_request();

        for q in [
            query(None, Some("Math"), Some("08:00")),
            query(Some("1"), None, Some("08:00")),
            query(Some("1"), Some("Math"), None),
            query(Some(""), Some("Math"), Some("08:00")),
            query(Some("1"), Some("  "), Some("08:00")),
        ] {
            let response = service.search_classes(&request, q).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[actix_web::test]
    async fn test_malformed_filters_rejected_before_storage() {
        let service = ClassService::new_lazy();
        let request = TestRequest::default().to_http_request();

        for q in [
            query(Some("seven"), Some("Math"), Some("08:00")),
            query(Some("7"), Some("Math"), Some("08:00")),
            query(Some("1"), Some("Math"), Some("8h00")),
            query(Some("1"), Some("Math"), Some("25:00")),
        ] {
            let response = service.search_classes(&request, q).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    // 端到端：注册一名教师后按不同时刻检索
    #[actix_web::test]
    async fn test_register_then_search_through_services() {
        let storage: Arc<dyn Storage> = Arc::new(
            SeaOrmStorage::connect("sqlite::memory:", 1, 5)
                .await
                .expect("in-memory storage"),
        );
        let service = ClassService::new_with_storage(storage);
        let request = TestRequest::default().to_http_request();

        let create = CreateClassRequest {
            name: "Maria Silva".to_string(),
            avatar: "https://example.com/maria.png".to_string(),
            whatsapp: "+5511999990000".to_string(),
            bio: "Ten years teaching experience".to_string(),
            subject: "Math".to_string(),
            cost: 80.0,
            schedule: vec![ScheduleItemRequest {
                week_day: 1,
                from: "08:00".to_string(),
                to: "09:00".to_string(),
            }],
        };
        let response = service.create_class(&request, create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = service
            .search_classes(&request, query(Some("1"), Some("Math"), Some("08:30")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let matches: Vec<ClassMatch> = serde_json::from_slice(&body).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Maria Silva");

        // 窗口恰好结束于 09:00，此刻的查询不命中
        let response = service
            .search_classes(&request, query(Some("1"), Some("Math"), Some("09:00")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let matches: Vec<ClassMatch> = serde_json::from_slice(&body).unwrap();
        assert!(matches.is_empty());
    }
}
