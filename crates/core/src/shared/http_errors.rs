use axum::http::StatusCode;

use crate::authentication::ApiKeyHeaderError;

pub type HttpError = (StatusCode, String);

pub fn unauthorized(message: Option<String>) -> HttpError {
    (StatusCode::UNAUTHORIZED, message.unwrap_or("Unauthorized".to_string()))
}

impl From<ApiKeyHeaderError> for HttpError {
    fn from(error: ApiKeyHeaderError) -> HttpError {
        unauthorized(Some(error.to_string()))
    }
}
