use super::{DeliveryMode, SkillLevel};

/// Payload for creating or fully replacing a course
#[derive(Debug, Clone)]
pub struct CourseInputDto {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub mode: DeliveryMode,
    pub level: SkillLevel,
    pub price: String,
    pub rating: f64,
    pub reviews: i32,
    pub total_participants: i32,
    pub certificate_providers: Option<String>,
    pub promo_code: Option<String>,
    pub demo_certificate: Option<String>,
}
