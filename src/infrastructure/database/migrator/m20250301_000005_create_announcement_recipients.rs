//! Create announcement_recipients table migration

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_users::Users;
use super::m20250301_000004_create_announcements::Announcements;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AnnouncementRecipients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnnouncementRecipients::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AnnouncementRecipients::AnnouncementId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AnnouncementRecipients::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AnnouncementRecipients::Status)
                            .string_len(10)
                            .not_null()
                            .default("UNREAD"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_announcement_recipients_announcement_id")
                            .from(
                                AnnouncementRecipients::Table,
                                AnnouncementRecipients::AnnouncementId,
                            )
                            .to(Announcements::Table, Announcements::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_announcement_recipients_user_id")
                            .from(
                                AnnouncementRecipients::Table,
                                AnnouncementRecipients::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_announcement_recipients_user_id")
                    .table(AnnouncementRecipients::Table)
                    .col(AnnouncementRecipients::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(AnnouncementRecipients::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum AnnouncementRecipients {
    Table,
    Id,
    AnnouncementId,
    UserId,
    Status,
}
