//! 请求参数校验工具

/// 校验星期数是否在 0-6 范围内
pub fn validate_week_day(week_day: i32) -> Result<(), &'static str> {
    if !(0..=6).contains(&week_day) {
        return Err("week_day must be an integer between 0 and 6");
    }
    Ok(())
}

/// 校验一个可用时间窗口，区间为左闭右开 [from, to)
pub fn validate_schedule_window(from_minutes: i32, to_minutes: i32) -> Result<(), &'static str> {
    if from_minutes >= to_minutes {
        return Err("schedule entry must end after it starts");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_week_day() {
        assert!(validate_week_day(0).is_ok());
        assert!(validate_week_day(3).is_ok());
        assert!(validate_week_day(6).is_ok());
    }

    #[test]
    fn test_invalid_week_day() {
        assert!(validate_week_day(-1).is_err());
        assert!(validate_week_day(7).is_err());
    }

    #[test]
    fn test_valid_schedule_window() {
        assert!(validate_schedule_window(480, 540).is_ok());
        assert!(validate_schedule_window(0, 1).is_ok());
    }

    #[test]
    fn test_degenerate_schedule_window() {
        assert!(validate_schedule_window(540, 540).is_err());
        assert!(validate_schedule_window(540, 480).is_err());
    }
}
