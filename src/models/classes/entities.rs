use serde::{Deserialize, Serialize};

// 课程实体
//
// 一个教师的一条学科/课时费报价。本流程中每次注册恰好创建一条，
// 数据库模式本身允许一个教师拥有多条课程。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub subject: String,
    pub cost: f64,
    pub user_id: i64,
}
