use chrono::{DateTime, Utc};

/// Who an announcement is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    All,
    Users,
    Batch,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Users => "USERS",
            Self::Batch => "BATCH",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ALL" => Some(Self::All),
            "USERS" => Some(Self::Users),
            "BATCH" => Some(Self::Batch),
            _ => None,
        }
    }
}

/// Admin broadcast message. Never edited in place, only created and deleted.
#[derive(Clone, Debug)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub target_type: TargetType,
    /// Only set when `target_type == Batch`
    pub batch_id: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Read status of a materialized recipient row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientStatus {
    Unread,
    Read,
}

impl Default for RecipientStatus {
    fn default() -> Self {
        Self::Unread
    }
}

impl RecipientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "UNREAD",
            Self::Read => "READ",
        }
    }
}

/// Recipient row joined with the user fields the admin screen displays
#[derive(Clone, Debug)]
pub struct RecipientInfo {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    pub batch_id: Option<String>,
    pub status: RecipientStatus,
}
