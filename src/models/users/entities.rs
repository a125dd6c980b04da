use serde::{Deserialize, Serialize};

// 教师档案实体
//
// 在注册事务中与课程一起创建，本服务不提供更新入口。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}
