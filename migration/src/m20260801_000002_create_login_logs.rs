use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create login_logs table
        manager
            .create_table(
                Table::create()
                    .table(LoginLogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LoginLogs::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(LoginLogs::UserId).string().not_null())
                    .col(ColumnDef::new(LoginLogs::IpAddress).string())
                    .col(ColumnDef::new(LoginLogs::UserAgent).string())
                    .col(ColumnDef::new(LoginLogs::LoginTime).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_login_logs_user_id")
                            .from(LoginLogs::Table, LoginLogs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes separately
        manager
            .create_index(
                Index::create()
                    .name("idx_login_logs_user_id")
                    .table(LoginLogs::Table)
                    .col(LoginLogs::UserId)
                    .to_owned(),
            )
            .await?;

        // Default retrieval order is login_time descending
        manager
            .create_index(
                Index::create()
                    .name("idx_login_logs_login_time")
                    .table(LoginLogs::Table)
                    .col(LoginLogs::LoginTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoginLogs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LoginLogs {
    Table,
    Id,
    UserId,
    IpAddress,
    UserAgent,
    LoginTime,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
