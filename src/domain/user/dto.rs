use chrono::NaiveDate;

use super::UserRole;

/// Data for creating a user (local registration or first Google sign-in)
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub full_name: String,
    pub email: String,
    /// Already-hashed password; `None` for OAuth-created accounts
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
    pub is_verified: bool,
    pub verification_token: Option<String>,
}

/// Self-service profile edit: every field optional, absent fields untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileDto {
    pub full_name: Option<String>,
    pub hometown: Option<String>,
    pub contact_number: Option<String>,
    pub status: Option<String>,
    pub nic: Option<String>,
    pub sex: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// Admin edit of institutional identifiers
#[derive(Debug, Clone, Default)]
pub struct UpdateIdsDto {
    pub student_id: Option<String>,
    pub batch_id: Option<String>,
}
