use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Avatar).string().not_null())
                    .col(ColumnDef::new(Users::Whatsapp).string().not_null())
                    .col(ColumnDef::new(Users::Bio).text().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::Subject).string().not_null())
                    .col(ColumnDef::new(Classes::Cost).double().not_null())
                    .col(ColumnDef::new(Classes::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程时间表
        // CHECK 约束兜底时间窗口不变量：星期 0-6，分钟 0-1439，from < to
        manager
            .create_table(
                Table::create()
                    .table(ClassSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassSchedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::WeekDay)
                            .integer()
                            .not_null()
                            .check(Expr::col(ClassSchedules::WeekDay).between(0, 6)),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::From)
                            .integer()
                            .not_null()
                            .check(Expr::col(ClassSchedules::From).between(0, 1439)),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::To)
                            .integer()
                            .not_null()
                            .check(Expr::col(ClassSchedules::To).between(0, 1439))
                            .check(
                                Expr::col(ClassSchedules::From)
                                    .lt(Expr::col(ClassSchedules::To)),
                            ),
                    )
                    .col(
                        ColumnDef::new(ClassSchedules::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassSchedules::Table, ClassSchedules::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建联系记录表
        manager
            .create_table(
                Table::create()
                    .table(Connections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Connections::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Connections::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Connections::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Connections::Table, Connections::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 课程表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classes_user_id")
                    .table(Classes::Table)
                    .col(Classes::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classes_subject")
                    .table(Classes::Table)
                    .col(Classes::Subject)
                    .to_owned(),
            )
            .await?;

        // 课程时间表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_schedules_class_id")
                    .table(ClassSchedules::Table)
                    .col(ClassSchedules::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_schedules_week_day")
                    .table(ClassSchedules::Table)
                    .col(ClassSchedules::WeekDay)
                    .to_owned(),
            )
            .await?;

        // 联系记录表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_connections_user_id")
                    .table(Connections::Table)
                    .col(Connections::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Connections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassSchedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    Avatar,
    Whatsapp,
    Bio,
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Subject,
    Cost,
    UserId,
}

#[derive(DeriveIden)]
enum ClassSchedules {
    #[sea_orm(iden = "class_schedules")]
    Table,
    Id,
    WeekDay,
    #[sea_orm(iden = "from")]
    From,
    #[sea_orm(iden = "to")]
    To,
    ClassId,
}

#[derive(DeriveIden)]
enum Connections {
    #[sea_orm(iden = "connections")]
    Table,
    Id,
    UserId,
    CreatedAt,
}
