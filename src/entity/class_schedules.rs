//! 课程时间表实体
//!
//! `from`/`to` 是 SQL 关键字，Rust 字段名用 `from_minutes`/`to_minutes`，
//! 通过 `column_name` 映射回原始列名。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub week_day: i32,
    #[sea_orm(column_name = "from")]
    pub from_minutes: i32,
    #[sea_orm(column_name = "to")]
    pub to_minutes: i32,
    pub class_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
