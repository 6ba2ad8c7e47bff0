//! Create users table migration

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
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
                    .col(ColumnDef::new(Users::FullName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string_len(255).null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(20)
                            .not_null()
                            .default("STUDENT"),
                    )
                    .col(ColumnDef::new(Users::Hometown).string_len(255).null())
                    .col(ColumnDef::new(Users::ContactNumber).string_len(50).null())
                    .col(ColumnDef::new(Users::Status).string_len(100).null())
                    .col(ColumnDef::new(Users::Nic).string_len(50).null())
                    .col(ColumnDef::new(Users::Sex).string_len(20).null())
                    .col(ColumnDef::new(Users::DateOfBirth).date().null())
                    .col(
                        ColumnDef::new(Users::AccountStatus)
                            .string_len(20)
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(ColumnDef::new(Users::StudentId).string_len(50).null())
                    .col(ColumnDef::new(Users::BatchId).string_len(50).null())
                    .col(
                        ColumnDef::new(Users::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::VerificationToken)
                            .string_len(64)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Batch lookups back announcement targeting
        manager
            .create_index(
                Index::create()
                    .name("idx_users_batch_id")
                    .table(Users::Table)
                    .col(Users::BatchId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    FullName,
    Email,
    PasswordHash,
    Role,
    Hometown,
    ContactNumber,
    Status,
    Nic,
    Sex,
    DateOfBirth,
    AccountStatus,
    StudentId,
    BatchId,
    IsVerified,
    VerificationToken,
    CreatedAt,
    UpdatedAt,
}
