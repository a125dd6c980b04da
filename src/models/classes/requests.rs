use serde::Deserialize;

// 课程查询参数（来自HTTP请求）
//
// 三个过滤条件都必须存在且非空，缺失时在访问存储层之前直接拒绝。
// 字段保持字符串形态，由服务层负责解析与校验。
#[derive(Debug, Deserialize)]
pub struct SearchClassesQuery {
    pub week_day: Option<String>,
    pub subject: Option<String>,
    pub time: Option<String>,
}

// 注册请求中的单个时间窗口
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleItemRequest {
    pub week_day: i32,
    pub from: String,
    pub to: String,
}

// 创建教师档案 + 课程 + 时间表的注册请求
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
    pub subject: String,
    pub cost: f64,
    pub schedule: Vec<ScheduleItemRequest>,
}

// 课程检索条件（用于存储层，已完成解析与校验）
#[derive(Debug, Clone)]
pub struct ClassSearchFilters {
    pub week_day: i32,
    pub subject: String,
    pub time_minutes: i32,
}

// 已校验的时间窗口（用于存储层）
#[derive(Debug, Clone)]
pub struct ScheduleWindow {
    pub week_day: i32,
    pub from_minutes: i32,
    pub to_minutes: i32,
}

// 注册事务的输入（用于存储层，已完成解析与校验）
#[derive(Debug, Clone)]
pub struct ClassRegistration {
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
    pub subject: String,
    pub cost: f64,
    pub schedule: Vec<ScheduleWindow>,
}
