use std::sync::Arc;

use crate::models::classes::{
    requests::{ClassRegistration, ClassSearchFilters},
    responses::ClassMatch,
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程模块方法
    // 按 (星期, 学科, 时刻) 检索可用课程，结果按课程去重
    async fn search_classes(&self, filters: ClassSearchFilters) -> Result<Vec<ClassMatch>>;
    // 在单个事务中注册教师档案、课程与全部时间窗口
    async fn register_class(&self, registration: ClassRegistration) -> Result<()>;

    /// 联系记录方法
    // 统计联系总数
    async fn count_connections(&self) -> Result<i64>;
    // 为指定教师记录一次联系
    async fn create_connection(&self, user_id: i64) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
