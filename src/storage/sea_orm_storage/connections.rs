//! 联系记录存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{ConnectionActiveModel, Connections};
use crate::errors::{Result, TutorMatchError};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

impl SeaOrmStorage {
    /// 统计联系总数
    pub async fn count_connections_impl(&self) -> Result<i64> {
        let total = Connections::find()
            .count(&self.db)
            .await
            .map_err(|e| TutorMatchError::database_operation(format!("统计联系总数失败: {e}")))?;

        Ok(total as i64)
    }

    /// 为指定教师记录一次联系
    pub async fn create_connection_impl(&self, user_id: i64) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        ConnectionActiveModel {
            user_id: Set(user_id),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| TutorMatchError::database_operation(format!("记录联系失败: {e}")))?;

        Ok(())
    }
}
