//! Create user_selected_courses (enrollments) table migration

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_users::Users;
use super::m20250301_000002_create_courses::Courses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserSelectedCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserSelectedCourses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserSelectedCourses::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserSelectedCourses::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserSelectedCourses::SelectedCourseTitle)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserSelectedCourses::CompletionStatus)
                            .string_len(20)
                            .not_null()
                            .default("ENROLLED"),
                    )
                    .col(
                        ColumnDef::new(UserSelectedCourses::CertificateUrl)
                            .string_len(512)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserSelectedCourses::EnrolledDate)
                            .date()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_selected_courses_user_id")
                            .from(UserSelectedCourses::Table, UserSelectedCourses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_selected_courses_course_id")
                            .from(UserSelectedCourses::Table, UserSelectedCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Booking is idempotent per user and course
        manager
            .create_index(
                Index::create()
                    .name("idx_user_selected_courses_user_course")
                    .table(UserSelectedCourses::Table)
                    .col(UserSelectedCourses::UserId)
                    .col(UserSelectedCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSelectedCourses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserSelectedCourses {
    Table,
    Id,
    UserId,
    CourseId,
    SelectedCourseTitle,
    CompletionStatus,
    CertificateUrl,
    EnrolledDate,
}
