//! Shared HTTP response envelope and error mapping

pub mod validated_json;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::DomainError;

/// Uniform response envelope used by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// HTTP status for a domain error
pub fn error_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a domain error to the standard error tuple handlers return
pub fn domain_error<T>(error: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    (error_status(&error), Json(ApiResponse::error(error.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_expected_statuses() {
        assert_eq!(
            error_status(&DomainError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&DomainError::Unauthorized("no".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            error_status(&DomainError::Forbidden("no".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            error_status(&DomainError::NotFound {
                entity: "User",
                field: "id",
                value: "1".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_status(&DomainError::Conflict("dup".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            error_status(&DomainError::Storage("db".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn envelope_omits_empty_fields() {
        let ok = serde_json::to_value(ApiResponse::success(5)).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": 5}));

        let err = serde_json::to_value(ApiResponse::<()>::error("boom")).unwrap();
        assert_eq!(err, serde_json::json!({"success": false, "error": "boom"}));
    }
}
