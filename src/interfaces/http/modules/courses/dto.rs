//! Course catalog DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Course, CourseInputDto, DeliveryMode, SkillLevel};
use crate::shared::{DomainError, DomainResult};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub mode: String,
    pub level: String,
    pub price: String,
    pub rating: f64,
    pub reviews: i32,
    pub total_participants: i32,
    pub certificate_providers: Option<String>,
    pub promo_code: Option<String>,
    pub demo_certificate: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            image: course.image,
            mode: course.mode.as_str().to_string(),
            level: course.level.as_str().to_string(),
            price: course.price,
            rating: course.rating,
            reviews: course.reviews,
            total_participants: course.total_participants,
            certificate_providers: course.certificate_providers,
            promo_code: course.promo_code,
            demo_certificate: course.demo_certificate,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

/// Create / full-replace payload for a catalog entry
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub image: Option<String>,
    /// "Online" | "Physical" | "Both"
    pub mode: String,
    /// "Beginner" | "Intermediate" | "Advanced"
    pub level: String,
    #[validate(length(min = 1, max = 50, message = "price is required"))]
    pub price: String,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be 0-5"))]
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: i32,
    #[serde(default)]
    pub total_participants: i32,
    pub certificate_providers: Option<String>,
    pub promo_code: Option<String>,
    pub demo_certificate: Option<String>,
}

impl CourseRequest {
    /// Parse the string-typed enum fields, rejecting unknown labels.
    pub fn into_input(self) -> DomainResult<CourseInputDto> {
        let mode = DeliveryMode::parse(&self.mode).ok_or_else(|| {
            DomainError::Validation(format!(
                "Invalid mode '{}', expected Online, Physical or Both",
                self.mode
            ))
        })?;
        let level = SkillLevel::parse(&self.level).ok_or_else(|| {
            DomainError::Validation(format!(
                "Invalid level '{}', expected Beginner, Intermediate or Advanced",
                self.level
            ))
        })?;

        Ok(CourseInputDto {
            title: self.title,
            description: self.description,
            image: self.image,
            mode,
            level,
            price: self.price,
            rating: self.rating,
            reviews: self.reviews,
            total_participants: self.total_participants,
            certificate_providers: self.certificate_providers,
            promo_code: self.promo_code,
            demo_certificate: self.demo_certificate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mode: &str, level: &str) -> CourseRequest {
        CourseRequest {
            title: "Rust 101".into(),
            description: "Intro".into(),
            image: None,
            mode: mode.into(),
            level: level.into(),
            price: "Free".into(),
            rating: 0.0,
            reviews: 0,
            total_participants: 0,
            certificate_providers: None,
            promo_code: None,
            demo_certificate: None,
        }
    }

    #[test]
    fn unknown_mode_or_level_is_rejected() {
        assert!(request("Online", "Beginner").into_input().is_ok());
        assert!(request("Remote", "Beginner").into_input().is_err());
        assert!(request("Online", "Expert").into_input().is_err());
    }
}
