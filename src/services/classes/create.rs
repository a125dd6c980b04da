use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::ErrorResponse;
use crate::models::classes::requests::{ClassRegistration, CreateClassRequest, ScheduleWindow};
use crate::utils::convert_hour_to_minutes;
use crate::utils::validate::{validate_schedule_window, validate_week_day};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    // 时间表解析与校验全部通过后才开启事务
    let registration = match build_registration(class_data) {
        Ok(registration) => registration,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(msg)));
        }
    };

    let storage = service.get_storage(request);

    match storage.register_class(registration).await {
        Ok(()) => {
            info!("New class registered successfully");
            Ok(HttpResponse::Created().finish())
        }
        Err(e) => {
            // 失败明细仅记录日志，不跨边界暴露给调用方
            error!("Class registration failed: {}", e);
            Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
                "Unexpected error while creating new class",
            )))
        }
    }
}

/// 将注册请求转换为已校验的存储层输入
///
/// 时间窗口逐条转换为自午夜起的分钟数，任何一条不合法则整体拒绝。
fn build_registration(request: CreateClassRequest) -> Result<ClassRegistration, &'static str> {
    if request.schedule.is_empty() {
        return Err("schedule must contain at least one entry");
    }

    let mut schedule = Vec::with_capacity(request.schedule.len());
    for item in &request.schedule {
        validate_week_day(item.week_day)?;
        let from_minutes = convert_hour_to_minutes(&item.from)?;
        let to_minutes = convert_hour_to_minutes(&item.to)?;
        validate_schedule_window(from_minutes, to_minutes)?;

        schedule.push(ScheduleWindow {
            week_day: item.week_day,
            from_minutes,
            to_minutes,
        });
    }

    Ok(ClassRegistration {
        name: request.name,
        avatar: request.avatar,
        whatsapp: request.whatsapp,
        bio: request.bio,
        subject: request.subject,
        cost: request.cost,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::requests::ScheduleItemRequest;

    fn request_with_schedule(schedule: Vec<ScheduleItemRequest>) -> CreateClassRequest {
        CreateClassRequest {
            name: "Maria Silva".to_string(),
            avatar: "https://example.com/maria.png".to_string(),
            whatsapp: "+5511999990000".to_string(),
            bio: "Ten years teaching experience".to_string(),
            subject: "Math".to_string(),
            cost: 80.0,
            schedule,
        }
    }

    fn item(week_day: i32, from: &str, to: &str) -> ScheduleItemRequest {
        ScheduleItemRequest {
            week_day,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_build_registration_converts_times() {
        let registration = build_registration(request_with_schedule(vec![
            item(1, "08:00", "09:00"),
            item(3, "14:00", "15:00"),
        ]))
        .unwrap();

        assert_eq!(registration.schedule.len(), 2);
        assert_eq!(registration.schedule[0].from_minutes, 480);
        assert_eq!(registration.schedule[0].to_minutes, 540);
        assert_eq!(registration.schedule[1].from_minutes, 840);
        assert_eq!(registration.schedule[1].to_minutes, 900);
    }

    #[test]
    fn test_build_registration_rejects_empty_schedule() {
        assert!(build_registration(request_with_schedule(vec![])).is_err());
    }

    #[test]
    fn test_build_registration_rejects_malformed_time() {
        assert!(build_registration(request_with_schedule(vec![item(1, "8h00", "09:00")])).is_err());
        assert!(build_registration(request_with_schedule(vec![item(1, "08:00", "24:30")])).is_err());
    }

    #[test]
    fn test_build_registration_rejects_inverted_window() {
        assert!(build_registration(request_with_schedule(vec![item(1, "09:00", "08:00")])).is_err());
        assert!(build_registration(request_with_schedule(vec![item(1, "09:00", "09:00")])).is_err());
    }

    #[test]
    fn test_build_registration_rejects_week_day_out_of_range() {
        assert!(build_registration(request_with_schedule(vec![item(7, "08:00", "09:00")])).is_err());
        assert!(build_registration(request_with_schedule(vec![item(-1, "08:00", "09:00")])).is_err());
    }
}
