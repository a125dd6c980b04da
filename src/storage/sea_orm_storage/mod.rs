//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classes;
mod connections;

use crate::config::AppConfig;
use crate::errors::{Result, TutorMatchError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例（从全局配置读取连接参数）
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 按显式参数连接数据库并运行迁移
    pub async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TutorMatchError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TutorMatchError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // 内存数据库只能依附单个连接
        let max_connections = if url.contains(":memory:") { 1 } else { pool_size };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| TutorMatchError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TutorMatchError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TutorMatchError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::classes::{
    requests::{ClassRegistration, ClassSearchFilters},
    responses::ClassMatch,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 课程模块
    async fn search_classes(&self, filters: ClassSearchFilters) -> Result<Vec<ClassMatch>> {
        self.search_classes_impl(filters).await
    }

    async fn register_class(&self, registration: ClassRegistration) -> Result<()> {
        self.register_class_impl(registration).await
    }

    // 联系记录模块
    async fn count_connections(&self) -> Result<i64> {
        self.count_connections_impl().await
    }

    async fn create_connection(&self, user_id: i64) -> Result<()> {
        self.create_connection_impl(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::prelude::{ClassSchedules, Classes, Users};
    use crate::models::classes::requests::{
        ClassRegistration, ClassSearchFilters, ScheduleWindow,
    };
    use sea_orm::{EntityTrait, PaginatorTrait};

    async fn memory_storage() -> SeaOrmStorage {
        SeaOrmStorage::connect("sqlite::memory:", 1, 5)
            .await
            .expect("in-memory storage")
    }

    fn window(week_day: i32, from_minutes: i32, to_minutes: i32) -> ScheduleWindow {
        ScheduleWindow {
            week_day,
            from_minutes,
            to_minutes,
        }
    }

    fn registration(subject: &str, schedule: Vec<ScheduleWindow>) -> ClassRegistration {
        ClassRegistration {
            name: "Maria Silva".to_string(),
            avatar: "https://example.com/maria.png".to_string(),
            whatsapp: "+5511999990000".to_string(),
            bio: "Ten years teaching experience".to_string(),
            subject: subject.to_string(),
            cost: 80.0,
            schedule,
        }
    }

    fn filters(week_day: i32, subject: &str, time_minutes: i32) -> ClassSearchFilters {
        ClassSearchFilters {
            week_day,
            subject: subject.to_string(),
            time_minutes,
        }
    }

    #[tokio::test]
    async fn test_register_creates_user_class_and_schedules() {
        let storage = memory_storage().await;

        storage
            .register_class_impl(registration(
                "Math",
                vec![window(1, 480, 540), window(3, 840, 900)],
            ))
            .await
            .expect("registration should succeed");

        assert_eq!(Users::find().count(&storage.db).await.unwrap(), 1);
        assert_eq!(Classes::find().count(&storage.db).await.unwrap(), 1);

        let class = Classes::find().one(&storage.db).await.unwrap().unwrap();
        let schedules = ClassSchedules::find().all(&storage.db).await.unwrap();
        assert_eq!(schedules.len(), 2);
        assert!(schedules.iter().all(|s| s.class_id == class.id));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_schedule() {
        let storage = memory_storage().await;

        let result = storage.register_class_impl(registration("Math", vec![])).await;
        assert!(result.is_err());
        assert_eq!(Users::find().count(&storage.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_register_rolls_back_when_schedule_insert_fails() {
        let storage = memory_storage().await;

        // 第二个窗口 from >= to，违反 CHECK 约束：
        // 教师和课程已插入成功，时间表插入失败，整个事务必须回滚
        let result = storage
            .register_class_impl(registration(
                "Math",
                vec![window(1, 480, 540), window(3, 540, 480)],
            ))
            .await;

        assert!(result.is_err());
        assert_eq!(Users::find().count(&storage.db).await.unwrap(), 0);
        assert_eq!(Classes::find().count(&storage.db).await.unwrap(), 0);
        assert_eq!(ClassSchedules::find().count(&storage.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_search_matches_subject_week_day_and_time() {
        let storage = memory_storage().await;

        storage
            .register_class_impl(registration("Math", vec![window(1, 480, 540)]))
            .await
            .unwrap();

        let matches = storage
            .search_classes_impl(filters(1, "Math", 510))
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].subject, "Math");
        assert_eq!(matches[0].name, "Maria Silva");

        // 学科不同或星期不同都不应命中
        assert!(storage
            .search_classes_impl(filters(1, "Chemistry", 510))
            .await
            .unwrap()
            .is_empty());
        assert!(storage
            .search_classes_impl(filters(2, "Math", 510))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_search_interval_is_half_open() {
        let storage = memory_storage().await;

        // 08:00 - 09:00
        storage
            .register_class_impl(registration("Math", vec![window(1, 480, 540)]))
            .await
            .unwrap();

        // 起点包含
        assert_eq!(
            storage.search_classes_impl(filters(1, "Math", 480)).await.unwrap().len(),
            1
        );
        // 终点前一分钟包含
        assert_eq!(
            storage.search_classes_impl(filters(1, "Math", 539)).await.unwrap().len(),
            1
        );
        // 终点本身不包含
        assert!(storage
            .search_classes_impl(filters(1, "Math", 540))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_search_deduplicates_overlapping_windows() {
        let storage = memory_storage().await;

        // 同一课程两个窗口都覆盖 08:30，结果中课程只出现一次
        storage
            .register_class_impl(registration(
                "Math",
                vec![window(1, 480, 540), window(1, 500, 560)],
            ))
            .await
            .unwrap();

        let matches = storage
            .search_classes_impl(filters(1, "Math", 510))
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[tokio::test]
    async fn test_register_then_search_end_to_end() {
        let storage = memory_storage().await;

        storage
            .register_class_impl(registration(
                "Math",
                vec![window(1, 480, 540), window(3, 840, 900)],
            ))
            .await
            .unwrap();

        let hit = storage
            .search_classes_impl(filters(1, "Math", 510))
            .await
            .unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].whatsapp, "+5511999990000");

        let miss = storage
            .search_classes_impl(filters(1, "Math", 540))
            .await
            .unwrap();
        assert!(miss.is_empty());
    }

    #[tokio::test]
    async fn test_connections_count_increments() {
        let storage = memory_storage().await;

        storage
            .register_class_impl(registration("Math", vec![window(1, 480, 540)]))
            .await
            .unwrap();
        let user = Users::find().one(&storage.db).await.unwrap().unwrap();

        assert_eq!(storage.count_connections_impl().await.unwrap(), 0);

        storage.create_connection_impl(user.id).await.unwrap();
        storage.create_connection_impl(user.id).await.unwrap();

        assert_eq!(storage.count_connections_impl().await.unwrap(), 2);
    }
}
