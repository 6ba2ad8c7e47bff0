use chrono::{DateTime, NaiveDate, Utc};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Student,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Student
    }
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "STUDENT" => Some(Self::Student),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status: toggled by admins, only two states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Suspended,
}

impl Default for AccountStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "SUSPENDED" => Some(Self::Suspended),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity
///
/// `password_hash` is `None` for accounts created through Google sign-in;
/// such accounts cannot log in with a password.
#[derive(Clone, Debug)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub hometown: Option<String>,
    pub contact_number: Option<String>,
    /// Occupational status free-form profile field ("Student", "Employed", ...)
    pub status: Option<String>,
    pub nic: Option<String>,
    pub sex: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub account_status: AccountStatus,
    pub student_id: Option<String>,
    pub batch_id: Option<String>,
    pub is_verified: bool,
    pub verification_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        assert_eq!(UserRole::parse("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("STUDENT"), Some(UserRole::Student));
        assert_eq!(UserRole::parse("viewer"), None);
        assert_eq!(UserRole::Admin.as_str(), "ADMIN");
    }

    #[test]
    fn account_status_rejects_unknown_values() {
        assert_eq!(AccountStatus::parse("ACTIVE"), Some(AccountStatus::Active));
        assert_eq!(
            AccountStatus::parse("SUSPENDED"),
            Some(AccountStatus::Suspended)
        );
        assert_eq!(AccountStatus::parse("DELETED"), None);
    }
}
