//! Create courses table migration

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::Image).string_len(512).null())
                    .col(ColumnDef::new(Courses::Mode).string_len(20).not_null())
                    .col(ColumnDef::new(Courses::Level).string_len(20).not_null())
                    .col(ColumnDef::new(Courses::Price).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Courses::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Courses::Reviews)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Courses::TotalParticipants)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Courses::CertificateProviders)
                            .string_len(255)
                            .null(),
                    )
                    .col(ColumnDef::new(Courses::PromoCode).string_len(50).null())
                    .col(
                        ColumnDef::new(Courses::DemoCertificate)
                            .string_len(512)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Courses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Courses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Courses {
    Table,
    Id,
    Title,
    Description,
    Image,
    Mode,
    Level,
    Price,
    Rating,
    Reviews,
    TotalParticipants,
    CertificateProviders,
    PromoCode,
    DemoCertificate,
    CreatedAt,
    UpdatedAt,
}
