use chrono::{DateTime, Utc};

/// Course delivery mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Online,
    Physical,
    Both,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Physical => "Physical",
            Self::Both => "Both",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Online" => Some(Self::Online),
            "Physical" => Some(Self::Physical),
            "Both" => Some(Self::Both),
            _ => None,
        }
    }
}

/// Course skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Beginner" => Some(Self::Beginner),
            "Intermediate" => Some(Self::Intermediate),
            "Advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// Catalog entry
#[derive(Clone, Debug)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub mode: DeliveryMode,
    pub level: SkillLevel,
    /// Display price ("Free", "$49", ...), stored as free text
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_and_level_parse_exact_labels_only() {
        assert_eq!(DeliveryMode::parse("Both"), Some(DeliveryMode::Both));
        assert_eq!(DeliveryMode::parse("both"), None);
        assert_eq!(SkillLevel::parse("Advanced"), Some(SkillLevel::Advanced));
        assert_eq!(SkillLevel::parse("Expert"), None);
    }
}
