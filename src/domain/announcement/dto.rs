/// Announcement creation request, target left unparsed until validation
#[derive(Debug, Clone)]
pub struct CreateAnnouncementDto {
    pub title: String,
    pub message: String,
    /// "ALL" | "USERS" | "BATCH"
    pub target: String,
    /// Required when target == USERS
    pub user_ids: Option<Vec<i64>>,
    /// Required when target == BATCH
    pub batch_id: Option<String>,
    pub created_by: Option<i64>,
}
