use serde::{Deserialize, Serialize};

use super::entities::Class;
use crate::models::users::entities::User;

// 课程检索结果行：课程列 + 教师列的联合投影
//
// 一条匹配课程只出现一次，即使它有多个命中的时间窗口。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMatch {
    pub id: i64,
    pub subject: String,
    pub cost: f64,
    pub user_id: i64,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}

impl ClassMatch {
    pub fn from_parts(class: Class, user: User) -> Self {
        Self {
            id: class.id,
            subject: class.subject,
            cost: class.cost,
            user_id: class.user_id,
            name: user.name,
            avatar: user.avatar,
            whatsapp: user.whatsapp,
            bio: user.bio,
        }
    }
}
