use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use todo_notes_types::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl AppError {
    pub fn note_not_found(note_id: i64) -> Self {
        Self::NotFound(format!("Todo Note with id={} is not available", note_id))
    }

    pub fn item_not_found(item_id: i64) -> Self {
        Self::NotFound(format!("Todo Item with id={} is not available", item_id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

// Ids are integer-typed in every route, so an unparsable one names nothing.
impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        Self::NotFound("The requested URL was not found on the server".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Database(e) => {
                log::error!("[TODOS] Database error: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (self.status(), Json(ErrorResponse { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("title is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::note_not_found(3).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(rusqlite::Error::InvalidQuery).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            AppError::note_not_found(3).to_string(),
            "Todo Note with id=3 is not available"
        );
        assert_eq!(
            AppError::item_not_found(8).to_string(),
            "Todo Item with id=8 is not available"
        );
    }
}
