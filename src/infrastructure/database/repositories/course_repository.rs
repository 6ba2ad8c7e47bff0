use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use crate::domain::{
    Course, CourseInputDto, CourseRepositoryInterface, DeliveryMode, SkillLevel,
};
use crate::infrastructure::database::entities::course;
use crate::shared::{DomainError, DomainResult};

pub struct CourseRepository {
    db: DatabaseConnection,
}

impl CourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_mode_to_domain(mode: course::DeliveryMode) -> DeliveryMode {
    match mode {
        course::DeliveryMode::Online => DeliveryMode::Online,
        course::DeliveryMode::Physical => DeliveryMode::Physical,
        course::DeliveryMode::Both => DeliveryMode::Both,
    }
}

fn domain_mode_to_entity(mode: DeliveryMode) -> course::DeliveryMode {
    match mode {
        DeliveryMode::Online => course::DeliveryMode::Online,
        DeliveryMode::Physical => course::DeliveryMode::Physical,
        DeliveryMode::Both => course::DeliveryMode::Both,
    }
}

fn entity_level_to_domain(level: course::SkillLevel) -> SkillLevel {
    match level {
        course::SkillLevel::Beginner => SkillLevel::Beginner,
        course::SkillLevel::Intermediate => SkillLevel::Intermediate,
        course::SkillLevel::Advanced => SkillLevel::Advanced,
    }
}

fn domain_level_to_entity(level: SkillLevel) -> course::SkillLevel {
    match level {
        SkillLevel::Beginner => course::SkillLevel::Beginner,
        SkillLevel::Intermediate => course::SkillLevel::Intermediate,
        SkillLevel::Advanced => course::SkillLevel::Advanced,
    }
}

fn course_model_to_domain(model: course::Model) -> Course {
    Course {
        id: model.id,
        title: model.title,
        description: model.description,
        image: model.image,
        mode: entity_mode_to_domain(model.mode),
        level: entity_level_to_domain(model.level),
        price: model.price,
        rating: model.rating,
        reviews: model.reviews,
        total_participants: model.total_participants,
        certificate_providers: model.certificate_providers,
        promo_code: model.promo_code,
        demo_certificate: model.demo_certificate,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl CourseRepositoryInterface for CourseRepository {
    async fn list_courses(&self) -> DomainResult<Vec<Course>> {
        let models = course::Entity::find()
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(course_model_to_domain).collect())
    }

    async fn get_course_by_id(&self, id: i64) -> DomainResult<Option<Course>> {
        let model = course::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(course_model_to_domain))
    }

    async fn create_course(&self, dto: CourseInputDto) -> DomainResult<Course> {
        let now = Utc::now();

        let new_course = course::ActiveModel {
            title: Set(dto.title),
            description: Set(dto.description),
            image: Set(dto.image),
            mode: Set(domain_mode_to_entity(dto.mode)),
            level: Set(domain_level_to_entity(dto.level)),
            price: Set(dto.price),
            rating: Set(dto.rating),
            reviews: Set(dto.reviews),
            total_participants: Set(dto.total_participants),
            certificate_providers: Set(dto.certificate_providers),
            promo_code: Set(dto.promo_code),
            demo_certificate: Set(dto.demo_certificate),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = new_course.insert(&self.db).await.map_err(db_err)?;

        Ok(course_model_to_domain(inserted))
    }

    async fn update_course(&self, id: i64, dto: CourseInputDto) -> DomainResult<Option<Course>> {
        let existing = course::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        // Full replace, every field comes from the payload
        let mut active: course::ActiveModel = existing.into();
        active.title = Set(dto.title);
        active.description = Set(dto.description);
        active.image = Set(dto.image);
        active.mode = Set(domain_mode_to_entity(dto.mode));
        active.level = Set(domain_level_to_entity(dto.level));
        active.price = Set(dto.price);
        active.rating = Set(dto.rating);
        active.reviews = Set(dto.reviews);
        active.total_participants = Set(dto.total_participants);
        active.certificate_providers = Set(dto.certificate_providers);
        active.promo_code = Set(dto.promo_code);
        active.demo_certificate = Set(dto.demo_certificate);
        active.updated_at = Set(Utc::now());

        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(Some(course_model_to_domain(updated)))
    }

    async fn delete_course(&self, id: i64) -> DomainResult<()> {
        let result = course::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Course",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}
