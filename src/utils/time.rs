//! 时间转换工具
//!
//! 将 "HH:MM" 格式的时间转换为自午夜起的分钟数，供查询与注册两条路径共用。

use once_cell::sync::Lazy;
use regex::Regex;

static HOUR_MINUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("Invalid time regex"));

/// 将 "HH:MM" 转换为自午夜起的分钟数
///
/// 格式校验：小时 0-23，分钟 0-59。格式不合法时显式拒绝，
/// 不允许非法值继续参与数值比较。
pub fn convert_hour_to_minutes(time: &str) -> Result<i32, &'static str> {
    let captures = HOUR_MINUTE_RE
        .captures(time.trim())
        .ok_or("time must be in HH:MM format")?;

    // 正则保证了两段都是纯数字
    let hours: i32 = captures[1].parse().map_err(|_| "time must be in HH:MM format")?;
    let minutes: i32 = captures[2].parse().map_err(|_| "time must be in HH:MM format")?;

    if hours > 23 {
        return Err("time hours must be between 00 and 23");
    }
    if minutes > 59 {
        return Err("time minutes must be between 00 and 59");
    }

    Ok(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_basic() {
        assert_eq!(convert_hour_to_minutes("09:30"), Ok(570));
        assert_eq!(convert_hour_to_minutes("00:00"), Ok(0));
        assert_eq!(convert_hour_to_minutes("23:59"), Ok(1439));
    }

    #[test]
    fn test_convert_single_digit_hour() {
        assert_eq!(convert_hour_to_minutes("8:00"), Ok(480));
    }

    #[test]
    fn test_convert_trims_whitespace() {
        assert_eq!(convert_hour_to_minutes(" 14:00 "), Ok(840));
    }

    #[test]
    fn test_convert_rejects_malformed() {
        assert!(convert_hour_to_minutes("").is_err());
        assert!(convert_hour_to_minutes("9").is_err());
        assert!(convert_hour_to_minutes("ab:cd").is_err());
        assert!(convert_hour_to_minutes("09:5").is_err());
        assert!(convert_hour_to_minutes("09:30:00").is_err());
    }

    #[test]
    fn test_convert_rejects_out_of_range() {
        assert!(convert_hour_to_minutes("24:00").is_err());
        assert!(convert_hour_to_minutes("25:00").is_err());
        assert!(convert_hour_to_minutes("09:60").is_err());
    }
}
