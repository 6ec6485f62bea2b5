// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::DatabaseError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound { entity: &'static str, id: String },

    // 409 Conflict
    Conflict(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> String {
        match self {
            ApiError::NotFound { entity, id } => format!("{} with id {} not found", entity, id),
            ApiError::BadRequest(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Conflict(msg)
            | ApiError::InternalServerError(msg)
            | ApiError::ServiceUnavailable(msg) => msg.clone(),
        }
    }

    /// Error kind name reported in the `type` field of the response body
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "IllegalArgumentException",
            ApiError::Forbidden(_) => "AccessDeniedException",
            ApiError::NotFound { .. } => "EntityNotFoundException",
            ApiError::Conflict(_) => "EntityExistsException",
            ApiError::InternalServerError(_) => "InternalServerError",
            ApiError::ServiceUnavailable(_) => "ServiceUnavailable",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "type": self.kind(),
            "message": self.message(),
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        ApiError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Duplicate { entity, id } => {
                ApiError::conflict(format!("{} with id {} already exists", entity, id))
            }
            DatabaseError::MissingIdentifier(entity) => {
                ApiError::bad_request(format!("{} requires an identifier", entity))
            }
            DatabaseError::ConfigMissing(_) | DatabaseError::InvalidDatabaseUrl => {
                tracing::error!("Database configuration error: {}", err);
                ApiError::service_unavailable("Database temporarily unavailable")
            }
            DatabaseError::Migrate(e) => {
                tracing::error!("Migration error: {}", e);
                ApiError::service_unavailable("Service is being updated, please try again later")
            }
            DatabaseError::Sqlx(sqlx_err) => {
                // Log the real error but return generic message
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::internal_server_error("Database error occurred")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<(ApiError, StatusCode, &'static str)> {
        vec![
            (ApiError::bad_request("bad id"), StatusCode::BAD_REQUEST, "IllegalArgumentException"),
            (ApiError::forbidden("denied"), StatusCode::FORBIDDEN, "AccessDeniedException"),
            (ApiError::not_found("HelpRequest", 7), StatusCode::NOT_FOUND, "EntityNotFoundException"),
            (ApiError::conflict("exists"), StatusCode::CONFLICT, "EntityExistsException"),
            (ApiError::internal_server_error("boom"), StatusCode::INTERNAL_SERVER_ERROR, "InternalServerError"),
            (ApiError::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE, "ServiceUnavailable"),
        ]
    }

    #[test]
    fn test_all_variants_status_and_kind() {
        for (error, status, kind) in all_variants() {
            assert_eq!(error.status_code(), status, "status mismatch for {:?}", error);
            assert_eq!(error.kind(), kind, "kind mismatch for {:?}", error);
        }
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiError::not_found("UCSBOrganization", "org1");
        assert_eq!(err.message(), "UCSBOrganization with id org1 not found");
        assert_eq!(err.to_string(), "UCSBOrganization with id org1 not found");
    }

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let err: ApiError = DatabaseError::Duplicate {
            entity: "UCSBOrganization",
            id: "ZPR".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.message(), "UCSBOrganization with id ZPR already exists");
    }

    #[test]
    fn test_sqlx_errors_hide_details() {
        let err: ApiError = DatabaseError::Sqlx(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Database error occurred");
    }

    #[tokio::test]
    async fn test_into_response_body_shape() {
        let response = ApiError::not_found("HelpRequest", 1).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({"type": "EntityNotFoundException", "message": "HelpRequest with id 1 not found"})
        );
    }
}
