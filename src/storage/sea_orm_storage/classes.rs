//! 课程存储操作
//!
//! 检索使用结构化的参数化查询构建器；注册在单个事务中完成全部插入。

use super::SeaOrmStorage;
use crate::entity::prelude::{
    ClassActiveModel, ClassScheduleActiveModel, ClassSchedules, Classes, UserActiveModel, Users,
};
use crate::entity::{class_schedules, classes};
use crate::errors::{Result, TutorMatchError};
use crate::models::classes::{
    requests::{ClassRegistration, ClassSearchFilters},
    responses::ClassMatch,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 检索可用课程
    ///
    /// 匹配规则：学科精确相等，且至少存在一个时间窗口满足
    /// `week_day == filters.week_day && from <= t && to > t`。
    /// 区间左闭右开，恰好在窗口结束时刻开始的查询不命中。
    pub async fn search_classes_impl(
        &self,
        filters: ClassSearchFilters,
    ) -> Result<Vec<ClassMatch>> {
        let rows = Classes::find()
            .join(JoinType::InnerJoin, classes::Relation::ClassSchedules.def())
            .filter(classes::Column::Subject.eq(filters.subject.as_str()))
            .filter(class_schedules::Column::WeekDay.eq(filters.week_day))
            .filter(class_schedules::Column::FromMinutes.lte(filters.time_minutes))
            .filter(class_schedules::Column::ToMinutes.gt(filters.time_minutes))
            .distinct()
            .order_by_asc(classes::Column::Id)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| TutorMatchError::database_operation(format!("检索课程失败: {e}")))?;

        // 外键保证每条课程都有对应的教师行
        let matches = rows
            .into_iter()
            .filter_map(|(class, user)| {
                user.map(|user| ClassMatch::from_parts(class.into_class(), user.into_user()))
            })
            .collect();

        Ok(matches)
    }

    /// 注册教师档案、课程与时间表
    ///
    /// 三级插入在同一事务中完成，任一失败则整体回滚，
    /// 不会出现部分注册的可见状态。
    pub async fn register_class_impl(&self, registration: ClassRegistration) -> Result<()> {
        if registration.schedule.is_empty() {
            return Err(TutorMatchError::validation(
                "schedule must contain at least one entry",
            ));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TutorMatchError::database_operation(format!("开启注册事务失败: {e}")))?;

        let user = UserActiveModel {
            name: Set(registration.name),
            avatar: Set(registration.avatar),
            whatsapp: Set(registration.whatsapp),
            bio: Set(registration.bio),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| TutorMatchError::database_operation(format!("创建教师失败: {e}")))?;

        let class = ClassActiveModel {
            subject: Set(registration.subject),
            cost: Set(registration.cost),
            user_id: Set(user.id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| TutorMatchError::database_operation(format!("创建课程失败: {e}")))?;

        let schedules: Vec<ClassScheduleActiveModel> = registration
            .schedule
            .into_iter()
            .map(|window| ClassScheduleActiveModel {
                week_day: Set(window.week_day),
                from_minutes: Set(window.from_minutes),
                to_minutes: Set(window.to_minutes),
                class_id: Set(class.id),
                ..Default::default()
            })
            .collect();

        ClassSchedules::insert_many(schedules)
            .exec(&txn)
            .await
            .map_err(|e| TutorMatchError::database_operation(format!("创建课程时间表失败: {e}")))?;

        // 失败路径上事务未提交即被丢弃，由存储引擎回滚
        txn.commit()
            .await
            .map_err(|e| TutorMatchError::database_operation(format!("提交注册事务失败: {e}")))?;

        Ok(())
    }
}
